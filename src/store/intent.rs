use crate::domain::{Money, NewCard, Tab};
use crate::ui::mvi::Intent;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    Login,
    /// Leaves the session and returns the tab to Home.
    Logout,
    SetTab(Tab),
    /// Credit `amount` to `card_id`. Unknown cards are ignored.
    Recharge {
        amount: Money,
        card_id: String,
        transaction_id: String,
        at: DateTime<Utc>,
    },
    AddCard {
        id: String,
        card: NewCard,
    },
    /// Back to the freshly seeded, logged-out state.
    Reset {
        at: DateTime<Utc>,
    },
}

impl Intent for StoreIntent {}
