use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::deferred::DeferredScheduler;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: ConfigStore) -> io::Result<()> {
    // Timers only: one worker is plenty.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("mobifacil-timers")
        .enable_time()
        .build()?;

    let tick_rate = config.get().timing.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let scheduler = DeferredScheduler::new(runtime.handle().clone(), events.sender());
    let mut app = App::new(config, scheduler);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Deferred { id, action }) => app.on_deferred(id, action),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("termination signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}
