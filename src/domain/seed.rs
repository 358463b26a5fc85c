//! Hard-coded records standing in for a backend.

use crate::domain::card::{Card, CardColor, CardKind};
use crate::domain::money::Money;
use crate::domain::service::{LineStatus, ServiceStatus};
use crate::domain::transaction::{Transaction, TransactionStatus};
use crate::domain::user::User;
use chrono::{DateTime, Duration, Utc};

pub fn mock_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Carlos Oliveira".to_string(),
        email: "carlos.oliveira@email.com".to_string(),
        photo_url: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?auto=format&fit=crop&q=80&w=100&h=100".to_string(),
    }
}

pub fn initial_cards() -> Vec<Card> {
    vec![
        Card {
            id: "c1".to_string(),
            name: "Meu Cartão".to_string(),
            number: "1234567890123456".to_string(),
            balance: Money::from_cents(1450),
            color: CardColor::Blue,
            kind: CardKind::Comum,
        },
        Card {
            id: "c2".to_string(),
            name: "Estudante".to_string(),
            number: "9876543210987654".to_string(),
            balance: Money::from_cents(4520),
            color: CardColor::Orange,
            kind: CardKind::Estudante,
        },
    ]
}

/// Seed history, newest first, dated relative to `now`.
pub fn initial_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let entry = |id: &str, days_ago: i64, cents: i64, description: &str| Transaction {
        id: id.to_string(),
        date: now - Duration::days(days_ago),
        amount: Money::from_cents(cents),
        card_id: "c1".to_string(),
        status: TransactionStatus::Concluido,
        description: description.to_string(),
    };
    vec![
        entry("t1", 0, -450, "Passagem Linha 302"),
        entry("t2", 1, 5000, "Recarga Pix"),
        entry("t3", 2, -450, "Passagem Linha 105"),
    ]
}

pub fn service_status() -> Vec<ServiceStatus> {
    let line = |name: &str, status: LineStatus, updated_at: &str| ServiceStatus {
        line: name.to_string(),
        status,
        updated_at: updated_at.to_string(),
    };
    vec![
        line("Circular 201", LineStatus::Normal, "Agora"),
        line("Express 05", LineStatus::Lento, "5 min"),
        line("Norte/Sul", LineStatus::Normal, "10 min"),
    ]
}
