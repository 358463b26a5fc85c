use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Mobi Facil: transit card wallet for the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mobifacil", version, about)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated authentication delay.
    #[arg(long, value_name = "MS")]
    pub login_delay_ms: Option<u64>,

    /// Simulated payment-confirmation delay.
    #[arg(long, value_name = "MS")]
    pub recharge_delay_ms: Option<u64>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Let a pending recharge complete even after leaving its screen.
    #[arg(long)]
    pub keep_pending: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.login_delay_ms {
            config.timing.login_delay_ms = ms;
        }
        if let Some(ms) = self.recharge_delay_ms {
            config.timing.recharge_delay_ms = ms;
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        if self.keep_pending {
            config.behavior.cancel_pending_on_leave = false;
        }
    }
}
