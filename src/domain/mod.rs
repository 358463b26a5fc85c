//! Plain data shapes shared by the store and the screens.

pub mod card;
pub mod money;
pub mod seed;
pub mod service;
pub mod tab;
pub mod transaction;
pub mod user;

pub use card::{Card, CardColor, CardKind, NewCard};
pub use money::Money;
pub use service::{LineStatus, ServiceStatus};
pub use tab::Tab;
pub use transaction::{Transaction, TransactionStatus, RECHARGE_DESCRIPTION};
pub use user::User;
