use crate::domain::Money;
use crate::ui::mvi::UiState;

/// Suggested amounts, in reais.
pub const PRESET_AMOUNTS: [i64; 4] = [10, 20, 50, 100];

/// Preset highlighted with the "Ideal" badge.
pub const IDEAL_PRESET: i64 = 50;

/// Longest manual amount, separator included.
pub const MAX_MANUAL_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// Index into [`PRESET_AMOUNTS`], if one is picked.
    Preset(Option<usize>),
    /// Raw manual entry.
    Manual(String),
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::Preset(None)
    }
}

impl AmountInput {
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual(_))
    }

    pub fn value(&self) -> Option<Money> {
        match self {
            Self::Preset(index) => index
                .and_then(|i| PRESET_AMOUNTS.get(i))
                .map(|reais| Money::from_reais(*reais)),
            Self::Manual(text) => Money::parse(text),
        }
    }
}

/// Screen-local recharge choices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RechargeDraft {
    /// Explicit pick; `None` means "first card".
    pub card_id: Option<String>,
    pub amount: AmountInput,
}

impl RechargeDraft {
    pub fn amount(&self) -> Option<Money> {
        self.amount.value()
    }

    /// The pay button is enabled only for a strictly positive amount.
    pub fn can_pay(&self) -> bool {
        self.amount().is_some_and(|amount| amount.is_positive())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RechargeFlowState {
    Selecting(RechargeDraft),
    /// Waiting for the simulated payment confirmation.
    Processing {
        card_id: String,
        amount: Money,
    },
    Success {
        amount: Money,
        card_name: String,
    },
}

impl Default for RechargeFlowState {
    fn default() -> Self {
        Self::Selecting(RechargeDraft::default())
    }
}

impl UiState for RechargeFlowState {}

impl RechargeFlowState {
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }

    /// Manual amount entry swallows digit keys.
    pub fn captures_text(&self) -> bool {
        matches!(self, Self::Selecting(draft) if draft.amount.is_manual())
    }

    pub fn draft(&self) -> Option<&RechargeDraft> {
        match self {
            Self::Selecting(draft) => Some(draft),
            _ => None,
        }
    }
}
