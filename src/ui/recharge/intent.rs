use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RechargeIntent {
    SelectCard { card_id: String },
    NextPreset,
    PrevPreset,
    /// Switch between suggestions and manual entry. Clears the amount.
    ToggleManual,
    InputChar(char),
    Backspace,
    /// Pay. `card_id` is the card the screen resolved as selected.
    Confirm { card_id: String },
    /// The payment delay elapsed and the store was credited.
    Completed { card_name: String },
    /// "Nova Recarga" from the success screen.
    NewRecharge,
    /// Screen unmounted.
    Reset,
}

impl Intent for RechargeIntent {}

