use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginIntent {
    InputChar(char),
    Backspace,
    SwitchField,
    /// Enter pressed. Moves to `Authenticating` when both fields are filled.
    Submit,
    Reset,
}

impl Intent for LoginIntent {}
