mod intent;
mod reducer;
mod state;

pub use intent::RechargeIntent;
pub use reducer::RechargeReducer;
pub use state::{
    AmountInput, RechargeDraft, RechargeFlowState, IDEAL_PRESET, MAX_MANUAL_LEN, PRESET_AMOUNTS,
};
