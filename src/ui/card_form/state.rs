use crate::domain::{CardColor, CardKind, NewCard};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardField {
    #[default]
    Name,
    Number,
    Kind,
    Color,
    Save,
}

impl CardField {
    const ORDER: [CardField; 5] = [
        CardField::Name,
        CardField::Number,
        CardField::Kind,
        CardField::Color,
        CardField::Save,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, CardField::Name | CardField::Number)
    }
}

/// In-progress "new card" input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    pub name: String,
    pub number: String,
    pub kind: CardKind,
    pub color: CardColor,
}

impl CardDraft {
    /// Both required fields are non-empty. Nothing else is checked.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.number.is_empty()
    }

    pub fn to_new_card(&self) -> NewCard {
        NewCard {
            name: self.name.clone(),
            number: self.number.clone(),
            kind: self.kind,
            color: self.color,
            ..NewCard::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardFormState {
    #[default]
    Closed,
    Open {
        draft: CardDraft,
        focus: CardField,
        show_required: bool,
    },
}

impl UiState for CardFormState {}

impl CardFormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The card to create if the form were submitted now.
    pub fn submission(&self) -> Option<NewCard> {
        match self {
            Self::Open { draft, .. } if draft.is_complete() => Some(draft.to_new_card()),
            _ => None,
        }
    }
}
