use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CardFormIntent {
    Open,
    /// Dismiss without saving; the draft is dropped.
    Close,
    FocusNext,
    FocusPrev,
    InputChar(char),
    Backspace,
    /// Left/Right on the type or color selector.
    CycleNext,
    CyclePrev,
    /// Closes the form when the draft is complete, flags required fields otherwise.
    Submit,
}

impl Intent for CardFormIntent {}
