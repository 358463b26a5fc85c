use crate::domain::{Card, Tab, Transaction, TransactionStatus, RECHARGE_DESCRIPTION};
use crate::store::intent::StoreIntent;
use crate::store::state::{AppState, Session};
use crate::ui::mvi::Reducer;
use std::sync::Arc;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = AppState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::Login => AppState {
                session: Session {
                    logged_in: true,
                    ..state.session
                },
                ..state
            },
            StoreIntent::Logout => AppState {
                session: Session {
                    logged_in: false,
                    current_tab: Tab::Home,
                },
                ..state
            },
            StoreIntent::SetTab(tab) => AppState {
                session: Session {
                    current_tab: tab,
                    ..state.session
                },
                ..state
            },
            StoreIntent::Recharge {
                amount,
                card_id,
                transaction_id,
                at,
            } => {
                if state.card(&card_id).is_none() {
                    return state;
                }

                let cards: Vec<Card> = state
                    .cards
                    .iter()
                    .map(|card| {
                        if card.id == card_id {
                            Card {
                                balance: card.balance + amount,
                                ..card.clone()
                            }
                        } else {
                            card.clone()
                        }
                    })
                    .collect();

                let mut transactions = Vec::with_capacity(state.transactions.len() + 1);
                transactions.push(Transaction {
                    id: transaction_id,
                    date: at,
                    amount,
                    card_id,
                    status: TransactionStatus::Concluido,
                    description: RECHARGE_DESCRIPTION.to_string(),
                });
                transactions.extend(state.transactions.iter().cloned());

                AppState {
                    cards: Arc::new(cards),
                    transactions: Arc::new(transactions),
                    ..state
                }
            }
            StoreIntent::AddCard { id, card } => {
                let mut cards = Vec::with_capacity(state.cards.len() + 1);
                cards.extend(state.cards.iter().cloned());
                cards.push(card.into_card(id));
                AppState {
                    cards: Arc::new(cards),
                    ..state
                }
            }
            StoreIntent::Reset { at } => AppState::seeded(at),
        }
    }
}
