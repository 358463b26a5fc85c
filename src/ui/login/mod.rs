mod intent;
mod reducer;
mod state;

pub use intent::LoginIntent;
pub use reducer::{LoginReducer, MAX_FIELD_LEN};
pub use state::{LoginField, LoginFormState};
