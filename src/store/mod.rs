//! The state container: single source of truth for the session and the
//! card and transaction collections.
//!
//! [`Store`] is a thin façade that stamps ids and timestamps onto intents
//! and runs them through [`StoreReducer`].

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{AppState, Session};

use crate::domain::{Card, Money, NewCard, Tab, Transaction};
use crate::ui::mvi::Reducer;
use chrono::Utc;
use uuid::Uuid;

pub struct Store {
    state: AppState,
    revision: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Store populated with the mock seed, logged out.
    pub fn new() -> Self {
        Self::with_state(AppState::seeded(Utc::now()))
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Bumped every time a dispatch produces a different state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.session.logged_in
    }

    pub fn current_tab(&self) -> Tab {
        self.state.session.current_tab
    }

    pub fn cards(&self) -> &[Card] {
        &self.state.cards
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn dispatch(&mut self, intent: StoreIntent) {
        let previous = self.state.clone();
        self.state = StoreReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state != previous {
            self.revision += 1;
        }
    }

    pub fn login(&mut self) {
        tracing::info!("session started");
        self.dispatch(StoreIntent::Login);
    }

    pub fn logout(&mut self) {
        tracing::info!("session ended");
        self.dispatch(StoreIntent::Logout);
    }

    pub fn set_current_tab(&mut self, tab: Tab) {
        tracing::debug!(?tab, "tab changed");
        self.dispatch(StoreIntent::SetTab(tab));
    }

    /// Credit `amount` to the card. No-op when the card does not exist;
    /// the amount itself is not checked.
    pub fn recharge(&mut self, amount: Money, card_id: &str) {
        if self.state.card(card_id).is_none() {
            tracing::debug!(card_id, "recharge ignored: unknown card");
        } else {
            tracing::info!(card_id, %amount, "recharge applied");
        }
        self.dispatch(StoreIntent::Recharge {
            amount,
            card_id: card_id.to_string(),
            transaction_id: format!("t{}", Uuid::new_v4().simple()),
            at: Utc::now(),
        });
    }

    /// Append a card with a fresh id and zero balance. Returns the new id.
    pub fn add_card(&mut self, card: NewCard) -> String {
        let id = loop {
            let candidate = format!("c{}", Uuid::new_v4().simple());
            if self.state.card(&candidate).is_none() {
                break candidate;
            }
        };
        tracing::info!(card_id = %id, name = %card.name, "card added");
        self.dispatch(StoreIntent::AddCard {
            id: id.clone(),
            card,
        });
        id
    }

    /// Discard everything accumulated since start-up.
    pub fn reset(&mut self) {
        tracing::info!("state reset to seed");
        self.dispatch(StoreIntent::Reset { at: Utc::now() });
    }
}
