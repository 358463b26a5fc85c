//! Terminal front end: event loop, screens and the screen-local state
//! machines that feed the store.

pub mod app;
pub mod card_form;
pub mod deferred;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod nav;
pub mod recharge;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;

pub use runtime::run;
