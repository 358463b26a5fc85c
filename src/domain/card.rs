use crate::domain::money::Money;

/// Visual theme of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Blue,
        CardColor::Purple,
        CardColor::Green,
        CardColor::Orange,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardColor::Blue => "blue",
            CardColor::Purple => "purple",
            CardColor::Green => "green",
            CardColor::Orange => "orange",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Fare category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardKind {
    #[default]
    Comum,
    Estudante,
    ValeTransporte,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Comum, CardKind::Estudante, CardKind::ValeTransporte];

    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Comum => "Comum",
            CardKind::Estudante => "Estudante",
            CardKind::ValeTransporte => "Vale-Transporte",
        }
    }

    /// Label used in the compact type selector of the new-card form.
    pub fn short_label(&self) -> &'static str {
        match self {
            CardKind::ValeTransporte => "VT",
            other => other.label(),
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|item| *item == current).unwrap_or(0) as isize;
    all[(index + step).rem_euclid(len) as usize]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    /// 16 digits by convention; not validated.
    pub number: String,
    pub balance: Money,
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    /// Last four characters of the card number.
    pub fn last_four(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.number[start..]
    }

    pub fn masked_number(&self) -> String {
        format!("•••• {}", self.last_four())
    }
}

/// Card record without an id, as submitted by the new-card form.
///
/// `balance` exists only so callers can pass through whatever they hold;
/// it is discarded when the card is created.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCard {
    pub name: String,
    pub number: String,
    pub balance: Money,
    pub color: CardColor,
    pub kind: CardKind,
}

impl NewCard {
    pub fn into_card(self, id: String) -> Card {
        Card {
            id,
            name: self.name,
            number: self.number,
            balance: Money::ZERO,
            color: self.color,
            kind: self.kind,
        }
    }
}
