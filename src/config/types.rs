use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
    pub behavior: BehaviorConfig,
    pub log: LogConfig,
}

/// Simulated latencies and the UI tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause between submitting the login form and entering the app (default: 1200).
    pub login_delay_ms: u64,
    /// Payment-confirmation wait of the recharge flow (default: 1500).
    pub recharge_delay_ms: u64,
    /// Redraw and spinner tick (default: 250).
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminal width, in columns, from which the sidebar replaces the bottom nav.
    pub wide_breakpoint: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Cancel a pending recharge when its screen is left. When false, the
    /// recharge still lands after the user navigated away.
    pub cancel_pending_on_leave: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `MOBIFACIL_LOG` is unset.
    pub level: String,
    /// Log destination. Logging is off without one.
    pub file: Option<PathBuf>,
}

impl TimingConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn recharge_delay(&self) -> Duration {
        Duration::from_millis(self.recharge_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1200,
            recharge_delay_ms: 1500,
            tick_rate_ms: 250,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint: 100,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            cancel_pending_on_leave: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
