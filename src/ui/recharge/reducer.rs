use crate::ui::mvi::Reducer;
use crate::ui::recharge::intent::RechargeIntent;
use crate::ui::recharge::state::{
    AmountInput, RechargeDraft, RechargeFlowState, MAX_MANUAL_LEN, PRESET_AMOUNTS,
};

/// Selecting → Processing → Success → Selecting.
///
/// Processing has no failure exit: once confirmed, the flow always reaches
/// Success when the deferred completion arrives.
pub struct RechargeReducer;

impl Reducer for RechargeReducer {
    type State = RechargeFlowState;
    type Intent = RechargeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, RechargeIntent::Reset) => RechargeFlowState::default(),

            (RechargeFlowState::Selecting(draft), intent) => reduce_selecting(draft, intent),

            (RechargeFlowState::Processing { amount, .. }, RechargeIntent::Completed { card_name }) => {
                RechargeFlowState::Success { amount, card_name }
            }

            (RechargeFlowState::Success { .. }, RechargeIntent::NewRecharge) => {
                RechargeFlowState::default()
            }

            (other, _) => other,
        }
    }
}

fn reduce_selecting(mut draft: RechargeDraft, intent: RechargeIntent) -> RechargeFlowState {
    match intent {
        RechargeIntent::SelectCard { card_id } => {
            draft.card_id = Some(card_id);
        }
        RechargeIntent::NextPreset => {
            if let AmountInput::Preset(index) = draft.amount {
                let next = index.map_or(0, |i| (i + 1) % PRESET_AMOUNTS.len());
                draft.amount = AmountInput::Preset(Some(next));
            }
        }
        RechargeIntent::PrevPreset => {
            if let AmountInput::Preset(index) = draft.amount {
                let last = PRESET_AMOUNTS.len() - 1;
                let prev = index.map_or(last, |i| if i == 0 { last } else { i - 1 });
                draft.amount = AmountInput::Preset(Some(prev));
            }
        }
        RechargeIntent::ToggleManual => {
            draft.amount = if draft.amount.is_manual() {
                AmountInput::Preset(None)
            } else {
                AmountInput::Manual(String::new())
            };
        }
        RechargeIntent::InputChar(ch) => {
            if let AmountInput::Manual(text) = &mut draft.amount {
                push_amount_char(text, ch);
            }
        }
        RechargeIntent::Backspace => {
            if let AmountInput::Manual(text) = &mut draft.amount {
                text.pop();
            }
        }
        RechargeIntent::Confirm { card_id } => {
            if let Some(amount) = draft.amount().filter(|amount| amount.is_positive()) {
                return RechargeFlowState::Processing { card_id, amount };
            }
        }
        RechargeIntent::Completed { .. } | RechargeIntent::NewRecharge | RechargeIntent::Reset => {}
    }
    RechargeFlowState::Selecting(draft)
}

/// Digits plus a single `,`/`.` separator, at most two decimals.
fn push_amount_char(text: &mut String, ch: char) {
    if text.chars().count() >= MAX_MANUAL_LEN {
        return;
    }
    let separator = text.find([',', '.']);
    match ch {
        '0'..='9' => {
            if let Some(pos) = separator {
                if text.len() - pos > 2 {
                    return;
                }
            }
            text.push(ch);
        }
        ',' | '.' if separator.is_none() => {
            if text.is_empty() {
                text.push('0');
            }
            text.push(',');
        }
        _ => {}
    }
}
