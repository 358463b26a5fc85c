mod common;

use common::*;
use crossterm::event::KeyCode;
use mobifacil::domain::Tab;

#[test]
fn keys_are_ignored_by_navigation_while_logged_out() {
    let mut h = make_app();
    h.press(KeyCode::Char('3'));
    assert_eq!(h.app.current_tab(), Tab::Home);
    assert!(!h.app.store().is_logged_in());
}

#[test]
fn empty_login_does_not_authenticate() {
    let mut h = make_app();
    h.press(KeyCode::Enter);
    assert!(!h.app.login_form().is_authenticating());
    assert!(h.app.pending_login_id().is_none());
}

#[test]
fn tab_and_digits_switch_screens() {
    let mut h = make_app();
    h.login();
    assert_eq!(h.app.current_tab(), Tab::Home);

    h.press(KeyCode::Tab);
    assert_eq!(h.app.current_tab(), Tab::Cards);
    h.press(KeyCode::BackTab);
    h.press(KeyCode::BackTab);
    assert_eq!(h.app.current_tab(), Tab::Profile);
    h.press(KeyCode::Char('3'));
    assert_eq!(h.app.current_tab(), Tab::Recharge);
    h.press(KeyCode::Char('9'));
    assert_eq!(h.app.current_tab(), Tab::Recharge);
}

#[test]
fn home_shortcuts_open_recharge_and_cards() {
    let mut h = make_app();
    h.login();
    h.press(KeyCode::Char('r'));
    assert_eq!(h.app.current_tab(), Tab::Recharge);
    h.press(KeyCode::Char('1'));
    h.press(KeyCode::Char('c'));
    assert_eq!(h.app.current_tab(), Tab::Cards);
}

#[test]
fn ctrl_l_logs_out_and_next_login_starts_home() {
    let mut h = make_app();
    h.login();
    h.press(KeyCode::Char('4'));
    h.ctrl('l');
    assert!(!h.app.store().is_logged_in());
    assert_eq!(h.app.current_tab(), Tab::Home);

    h.login();
    assert_eq!(h.app.current_tab(), Tab::Home);
}

#[test]
fn profile_menu_logout_entry() {
    let mut h = make_app();
    h.login();
    h.press(KeyCode::Char('4'));
    for _ in 0..4 {
        h.press(KeyCode::Down);
    }
    h.press(KeyCode::Enter);
    assert!(!h.app.store().is_logged_in());
}

#[test]
fn inert_profile_entry_only_shows_a_notice() {
    let mut h = make_app();
    h.login();
    h.press(KeyCode::Char('4'));
    h.press(KeyCode::Enter);
    assert!(h.app.store().is_logged_in());
    assert!(h.app.notice().is_some_and(|text| text.contains("Notificações")));
}

#[test]
fn ctrl_q_quits() {
    let mut h = make_app();
    h.ctrl('q');
    assert!(h.app.should_quit());
}

#[test]
fn config_reload_shows_notice() {
    let mut h = make_app();
    h.ctrl('r');
    // The test config path does not exist, so defaults are loaded.
    assert_eq!(h.app.notice(), Some("Configuração recarregada"));
}
