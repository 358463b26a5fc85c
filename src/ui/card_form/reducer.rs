use crate::ui::card_form::intent::CardFormIntent;
use crate::ui::card_form::state::{CardDraft, CardField, CardFormState};
use crate::ui::mvi::Reducer;

pub const MAX_NAME_LEN: usize = 24;
pub const MAX_NUMBER_LEN: usize = 19;

pub struct CardFormReducer;

impl Reducer for CardFormReducer {
    type State = CardFormState;
    type Intent = CardFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let CardFormState::Open {
            mut draft,
            focus,
            show_required,
        } = state
        else {
            return match intent {
                CardFormIntent::Open => CardFormState::Open {
                    draft: CardDraft::default(),
                    focus: CardField::Name,
                    show_required: false,
                },
                _ => CardFormState::Closed,
            };
        };

        let focus = match intent {
            CardFormIntent::Open => focus,
            CardFormIntent::Close => return CardFormState::Closed,
            CardFormIntent::Submit if draft.is_complete() => return CardFormState::Closed,
            CardFormIntent::Submit => {
                let focus = if draft.name.is_empty() {
                    CardField::Name
                } else {
                    CardField::Number
                };
                return CardFormState::Open {
                    draft,
                    focus,
                    show_required: true,
                };
            }
            CardFormIntent::FocusNext => focus.next(),
            CardFormIntent::FocusPrev => focus.prev(),
            CardFormIntent::InputChar(ch) => {
                match focus {
                    CardField::Name if !ch.is_control() => {
                        if draft.name.chars().count() < MAX_NAME_LEN {
                            draft.name.push(ch);
                        }
                    }
                    CardField::Number if ch.is_ascii_digit() || ch == ' ' => {
                        if draft.number.chars().count() < MAX_NUMBER_LEN {
                            draft.number.push(ch);
                        }
                    }
                    _ => {}
                }
                focus
            }
            CardFormIntent::Backspace => {
                match focus {
                    CardField::Name => {
                        draft.name.pop();
                    }
                    CardField::Number => {
                        draft.number.pop();
                    }
                    _ => {}
                }
                focus
            }
            CardFormIntent::CycleNext => {
                match focus {
                    CardField::Kind => draft.kind = draft.kind.next(),
                    CardField::Color => draft.color = draft.color.next(),
                    _ => {}
                }
                focus
            }
            CardFormIntent::CyclePrev => {
                match focus {
                    CardField::Kind => draft.kind = draft.kind.prev(),
                    CardField::Color => draft.color = draft.color.prev(),
                    _ => {}
                }
                focus
            }
        };

        CardFormState::Open {
            draft,
            focus,
            show_required,
        }
    }
}
