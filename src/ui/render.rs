use crate::domain::Tab;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{shell_regions, Chrome, FOOTER_HEIGHT};
use crate::ui::nav::{bottom_nav, render_sidebar};
use crate::ui::recharge::RechargeFlowState;
use crate::ui::screens::{cards, home, login, profile, recharge};
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    if !app.store().is_logged_in() {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
        login::render(frame, body, app);
        let hints = footer_hints(app);
        frame.render_widget(Footer::new(&hints).notice(app.notice()).widget(footer), footer);
        return;
    }

    let chrome = app.chrome();
    let regions = shell_regions(area, chrome);
    match chrome {
        Chrome::Sidebar => render_sidebar(frame, regions.nav, app.current_tab(), app.user()),
        Chrome::BottomNav => frame.render_widget(bottom_nav(app.current_tab()), regions.nav),
    }

    let body = regions.body.inner(Margin::new(2, 1));
    match app.current_tab() {
        Tab::Home => home::render(frame, body, app),
        Tab::Cards => cards::render(frame, body, app),
        Tab::Recharge => recharge::render(frame, body, app),
        Tab::Profile => profile::render(frame, body, app),
    }

    let hints = footer_hints(app);
    frame.render_widget(
        Footer::new(&hints).notice(app.notice()).widget(regions.footer),
        regions.footer,
    );

    if app.current_tab() == Tab::Cards && app.card_form().is_open() {
        cards::render_form(frame, area, app);
    }
}

/// Key hints for whatever currently owns the keyboard.
pub fn footer_hints(app: &App) -> String {
    if !app.store().is_logged_in() {
        return if app.login_form().is_authenticating() {
            "Entrando...".to_string()
        } else {
            "Tab trocar campo · Enter entrar · Ctrl+Q sair".to_string()
        };
    }
    let global = "Tab/1-4 navegar · Ctrl+L sair da conta · Ctrl+Q fechar";
    match app.current_tab() {
        Tab::Home => format!("r recarregar · c cartões · {global}"),
        Tab::Cards if app.card_form().is_open() => {
            "Tab/↑↓ campo · ←/→ tipo/cor · Enter salvar · Esc fechar".to_string()
        }
        Tab::Cards => format!("↑/↓ selecionar · Enter recarregar · n novo cartão · {global}"),
        Tab::Recharge => match app.recharge_flow() {
            RechargeFlowState::Selecting(draft) if draft.amount.is_manual() => {
                "Digite o valor · ↑/↓ cartão · m/Esc sugestões · Enter pagar".to_string()
            }
            RechargeFlowState::Selecting(_) => {
                format!("←/→ valor · ↑/↓ cartão · m valor manual · Enter pagar · {global}")
            }
            RechargeFlowState::Processing { .. } => recharge::processing_hint(app.animation_tick()),
            RechargeFlowState::Success { .. } => {
                "Enter nova recarga · v voltar ao início".to_string()
            }
        },
        Tab::Profile => format!("↑/↓ selecionar · Enter abrir · {global}"),
    }
}
