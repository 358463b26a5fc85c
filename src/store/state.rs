use crate::domain::seed;
use crate::domain::{Card, Tab, Transaction};
use crate::ui::mvi::UiState;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub logged_in: bool,
    pub current_tab: Tab,
}

/// Authoritative application state.
///
/// Collections are shared snapshots: a reducer that changes a collection
/// builds a new `Vec` behind a new `Arc`, one that doesn't hands back the
/// same pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub session: Session,
    pub cards: Arc<Vec<Card>>,
    pub transactions: Arc<Vec<Transaction>>,
}

impl UiState for AppState {}

impl AppState {
    /// Logged-out state populated with the mock records.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            session: Session::default(),
            cards: Arc::new(seed::initial_cards()),
            transactions: Arc::new(seed::initial_transactions(now)),
        }
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// First card, shown on the home screen.
    pub fn primary_card(&self) -> Option<&Card> {
        self.cards.first()
    }
}
