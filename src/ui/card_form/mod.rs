mod intent;
mod reducer;
mod state;

pub use intent::CardFormIntent;
pub use reducer::{CardFormReducer, MAX_NAME_LEN, MAX_NUMBER_LEN};
pub use state::{CardDraft, CardField, CardFormState};
