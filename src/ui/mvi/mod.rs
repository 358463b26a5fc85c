//! Model-View-Intent (MVI) primitives.
//!
//! Every state machine in the app (the store, the login form, the card form,
//! the recharge flow) is expressed with these traits.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, everything a view needs to render
//! - **Intent**: user action or timer event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
