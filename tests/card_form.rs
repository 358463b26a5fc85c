mod common;

use common::*;
use crossterm::event::KeyCode;
use mobifacil::domain::{CardColor, CardKind, Money, Tab};
use mobifacil::ui::card_form::{CardField, CardFormState};

fn on_cards_screen() -> Harness {
    let mut h = make_app();
    h.login();
    h.press(KeyCode::Char('2'));
    assert_eq!(h.app.current_tab(), Tab::Cards);
    h
}

#[test]
fn new_card_is_appended_with_zero_balance() {
    let mut h = on_cards_screen();
    h.press(KeyCode::Char('n'));
    assert!(h.app.card_form().is_open());

    h.type_text("Trabalho");
    h.press(KeyCode::Tab);
    h.type_text("4444 3333 2222 1111");
    h.press(KeyCode::Tab);
    h.press(KeyCode::Right);
    h.press(KeyCode::Right);
    h.press(KeyCode::Tab);
    h.press(KeyCode::Left);
    h.press(KeyCode::Enter);

    assert!(!h.app.card_form().is_open());
    let cards = h.app.store().cards();
    assert_eq!(cards.len(), 3);
    let created = &cards[2];
    assert_eq!(created.name, "Trabalho");
    assert_eq!(created.number, "4444 3333 2222 1111");
    assert_eq!(created.kind, CardKind::ValeTransporte);
    assert_eq!(created.color, CardColor::Orange);
    assert_eq!(created.balance, Money::ZERO);
    assert_eq!(h.app.card_selection(), 2);
}

#[test]
fn submit_with_missing_fields_keeps_form_open() {
    let mut h = on_cards_screen();
    h.press(KeyCode::Char('n'));
    h.type_text("Só nome");
    h.press(KeyCode::Enter);

    match h.app.card_form() {
        CardFormState::Open {
            focus,
            show_required,
            ..
        } => {
            assert!(*show_required);
            assert_eq!(*focus, CardField::Number);
        }
        CardFormState::Closed => panic!("form closed without a number"),
    }
    assert_eq!(h.app.store().cards().len(), 2);
}

#[test]
fn escape_discards_the_draft() {
    let mut h = on_cards_screen();
    h.press(KeyCode::Char('n'));
    h.type_text("Rascunho");
    h.press(KeyCode::Esc);
    assert!(!h.app.card_form().is_open());

    h.press(KeyCode::Char('n'));
    match h.app.card_form() {
        CardFormState::Open { draft, .. } => assert!(draft.name.is_empty()),
        CardFormState::Closed => panic!("form should be open"),
    }
    assert_eq!(h.app.store().cards().len(), 2);
}

#[test]
fn open_form_swallows_navigation_keys() {
    let mut h = on_cards_screen();
    h.press(KeyCode::Char('n'));
    h.type_text("1");
    h.press(KeyCode::Tab);
    assert_eq!(h.app.current_tab(), Tab::Cards);
    assert!(h.app.card_form().is_open());
}

#[test]
fn enter_on_a_card_opens_recharge_for_it() {
    let mut h = on_cards_screen();
    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);
    assert_eq!(h.app.current_tab(), Tab::Recharge);
    assert_eq!(h.app.recharge_card().map(|card| card.id.as_str()), Some("c2"));
}
