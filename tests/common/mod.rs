//! Shared test utilities: an App wired to a real timer runtime.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mobifacil::config::{Config, ConfigStore};
use mobifacil::ui::app::App;
use mobifacil::ui::deferred::DeferredScheduler;
use mobifacil::ui::events::AppEvent;
use mobifacil::ui::input::handle_key;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Short enough to keep tests fast, long enough to observe Processing.
pub const FAST_DELAY_MS: u64 = 20;

pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    _runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn press(&mut self, code: KeyCode) {
        handle_key(&mut self.app, press_key(code));
    }

    pub fn ctrl(&mut self, ch: char) {
        handle_key(&mut self.app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Block until the next deferred action fires and hand it to the app.
    /// Returns false on timeout.
    pub fn deliver_next_deferred(&mut self) -> bool {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while let Some(left) = deadline.checked_duration_since(std::time::Instant::now()) {
            match self.events.recv_timeout(left) {
                Ok(AppEvent::Deferred { id, action }) => {
                    self.app.on_deferred(id, action);
                    return true;
                }
                Ok(_) => continue,
                Err(_) => return false,
            }
        }
        false
    }

    /// Log in through the form, the way a user would.
    pub fn login(&mut self) {
        self.type_text("123.456.789-00");
        self.press(KeyCode::Tab);
        self.type_text("secret");
        self.press(KeyCode::Enter);
        assert!(self.app.login_form().is_authenticating());
        assert!(self.deliver_next_deferred(), "login never completed");
        assert!(self.app.store().is_logged_in());
    }
}

pub fn make_app() -> Harness {
    make_app_with(|_| {})
}

pub fn make_app_with(configure: impl FnOnce(&mut Config)) -> Harness {
    let mut config = Config::default();
    config.timing.login_delay_ms = FAST_DELAY_MS;
    config.timing.recharge_delay_ms = FAST_DELAY_MS;
    configure(&mut config);
    let store = ConfigStore::new(config, PathBuf::from("/tmp/mobifacil-test.toml"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("runtime");
    let (tx, rx) = mpsc::channel();
    let scheduler = DeferredScheduler::new(runtime.handle().clone(), tx);
    Harness {
        app: App::new(store, scheduler),
        events: rx,
        _runtime: runtime,
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
