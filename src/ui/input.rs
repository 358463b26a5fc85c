use crate::domain::Tab;
use crate::ui::app::App;
use crate::ui::card_form::{CardField, CardFormIntent, CardFormState};
use crate::ui::login::LoginIntent;
use crate::ui::recharge::{RechargeFlowState, RechargeIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    if !app.store().is_logged_in() {
        handle_login_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    // The card form is modal: it owns every key until closed.
    if app.current_tab() == Tab::Cards && app.card_form().is_open() {
        handle_card_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        KeyCode::Char(ch) if !app.captures_text() => {
            if let Some(tab) = Tab::from_digit(ch) {
                app.navigate(tab);
                return;
            }
        }
        _ => {}
    }

    match app.current_tab() {
        Tab::Home => handle_home_key(app, key),
        Tab::Cards => handle_cards_key(app, key),
        Tab::Recharge => handle_recharge_key(app, key),
        Tab::Profile => handle_profile_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_input(LoginIntent::SwitchField)
        }
        KeyCode::Backspace => app.login_input(LoginIntent::Backspace),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.login_input(LoginIntent::InputChar(ch))
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.navigate(Tab::Recharge),
        KeyCode::Char('c') => app.navigate(Tab::Cards),
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_card_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_card_selection(1),
        KeyCode::Char('n') | KeyCode::Char('+') => app.card_form_input(CardFormIntent::Open),
        KeyCode::Enter | KeyCode::Char('r') => app.recharge_selected_card(),
        _ => {}
    }
}

fn handle_card_form_key(app: &mut App, key: KeyEvent) {
    let focus = match app.card_form() {
        CardFormState::Open { focus, .. } => *focus,
        CardFormState::Closed => return,
    };
    match key.code {
        KeyCode::Esc => app.card_form_input(CardFormIntent::Close),
        KeyCode::Enter => app.submit_card_form(),
        KeyCode::Tab | KeyCode::Down => app.card_form_input(CardFormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.card_form_input(CardFormIntent::FocusPrev),
        KeyCode::Right => app.card_form_input(CardFormIntent::CycleNext),
        KeyCode::Left => app.card_form_input(CardFormIntent::CyclePrev),
        KeyCode::Backspace => app.card_form_input(CardFormIntent::Backspace),
        KeyCode::Char(' ') if focus == CardField::Save => app.submit_card_form(),
        KeyCode::Char(' ') if !focus.is_text() => app.card_form_input(CardFormIntent::CycleNext),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.card_form_input(CardFormIntent::InputChar(ch))
        }
        _ => {}
    }
}

fn handle_recharge_key(app: &mut App, key: KeyEvent) {
    match app.recharge_flow() {
        RechargeFlowState::Selecting(draft) => {
            let manual = draft.amount.is_manual();
            match key.code {
                KeyCode::Enter => app.confirm_recharge(),
                KeyCode::Up => app.cycle_recharge_card(-1),
                KeyCode::Down => app.cycle_recharge_card(1),
                KeyCode::Esc if manual => app.recharge_input(RechargeIntent::ToggleManual),
                KeyCode::Char('m') => app.recharge_input(RechargeIntent::ToggleManual),
                KeyCode::Left if !manual => app.recharge_input(RechargeIntent::PrevPreset),
                KeyCode::Right if !manual => app.recharge_input(RechargeIntent::NextPreset),
                KeyCode::Backspace => app.recharge_input(RechargeIntent::Backspace),
                KeyCode::Char(ch) if manual && !has_command_modifier(key) => {
                    app.recharge_input(RechargeIntent::InputChar(ch))
                }
                _ => {}
            }
        }
        RechargeFlowState::Processing { .. } => {}
        RechargeFlowState::Success { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => app.new_recharge(),
            KeyCode::Esc | KeyCode::Char('v') => app.back_to_start(),
            _ => {}
        },
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_profile_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_profile_selection(1),
        KeyCode::Enter => app.activate_profile_item(),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
