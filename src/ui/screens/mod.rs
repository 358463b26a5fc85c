//! One module per tab, plus the login screen. Each reads from [`App`] and
//! draws; none of them mutate state.
//!
//! [`App`]: crate::ui::app::App

pub mod cards;
pub mod home;
pub mod login;
pub mod profile;
pub mod recharge;
