mod loader;
mod store;
mod types;

pub use loader::{ConfigError, MIN_WIDE_BREAKPOINT};
pub use store::ConfigStore;
pub use types::{BehaviorConfig, Config, LayoutConfig, LogConfig, TimingConfig};
