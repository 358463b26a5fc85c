//! Fixed-point currency amounts.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// Amount in Brazilian reais.
///
/// Backed by a decimal so repeated recharges never drift the way binary
/// floats would. Displays in pt-BR notation: `R$ 14,50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn from_reais(reais: i64) -> Self {
        Self(Decimal::from(reais))
    }

    /// Parse user input such as `12`, `12,5` or `12.50`.
    ///
    /// Returns `None` for empty or malformed input. Sign and magnitude are
    /// not checked here; callers gate on [`Money::is_positive`].
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().replace(',', ".");
        if normalized.is_empty() {
            return None;
        }
        Decimal::from_str(&normalized).ok().map(Self)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:.2}", self.0.round_dp(2));
        write!(f, "R$ {}", digits.replace('.', ","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_comma_and_two_decimals() {
        assert_eq!(Money::from_cents(1450).to_string(), "R$ 14,50");
        assert_eq!(Money::from_reais(50).to_string(), "R$ 50,00");
        assert_eq!(Money::ZERO.to_string(), "R$ 0,00");
    }

    #[test]
    fn parse_accepts_both_separators() {
        assert_eq!(Money::parse("12,5"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse("12.50"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse(" 7 "), Some(Money::from_reais(7)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse("1,2,3"), None);
    }

    #[test]
    fn addition_is_exact() {
        let mut total = Money::ZERO;
        for _ in 0..10 {
            total += Money::from_cents(10);
        }
        assert_eq!(total, Money::from_reais(1));
    }

    #[test]
    fn sign_helpers() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::from_cents(-450).is_negative());
        assert_eq!(Money::from_cents(-450).abs(), Money::from_cents(450));
        assert_eq!(-Money::from_cents(450), Money::from_cents(-450));
    }
}
