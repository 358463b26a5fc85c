use crate::domain::money::Money;
use chrono::{DateTime, Utc};

/// Description stamped on credits created by an in-app recharge.
pub const RECHARGE_DESCRIPTION: &str = "Recarga Via App";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Concluido,
    Pendente,
    Cancelado,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Concluido => "concluido",
            TransactionStatus::Pendente => "pendente",
            TransactionStatus::Cancelado => "cancelado",
        }
    }
}

/// Movement on a card. Negative amounts are debits (fares), positive are credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub card_id: String,
    pub status: TransactionStatus,
    pub description: String,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }

    /// `+ R$ 50,00` for credits, `R$ 4,50` for debits.
    pub fn signed_display(&self) -> String {
        let prefix = if self.is_credit() { "+ " } else { "" };
        format!("{}{}", prefix, self.amount.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(cents: i64) -> Transaction {
        Transaction {
            id: "t1".into(),
            date: Utc::now(),
            amount: Money::from_cents(cents),
            card_id: "c1".into(),
            status: TransactionStatus::Concluido,
            description: "Passagem".into(),
        }
    }

    #[test]
    fn credit_gets_plus_sign() {
        assert_eq!(tx(5000).signed_display(), "+ R$ 50,00");
    }

    #[test]
    fn debit_shows_absolute_value() {
        assert_eq!(tx(-450).signed_display(), "R$ 4,50");
        assert!(!tx(-450).is_credit());
    }
}
