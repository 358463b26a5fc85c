//! Shared, reloadable configuration.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

type Overrides = Arc<dyn Fn(&mut Config) + Send + Sync>;

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: Option<Overrides>,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: None,
        }
    }

    /// Adjustment re-applied after every reload (command-line flags).
    /// Also applied once to the current config.
    pub fn with_overrides(mut self, overrides: impl Fn(&mut Config) + Send + Sync + 'static) -> Self {
        overrides(&mut self.inner.write());
        self.overrides = Some(Arc::new(overrides));
        self
    }

    /// Clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the file. On failure the previous config stays in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        if let Some(overrides) = &self.overrides {
            overrides(&mut config);
        }
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_survive_reload() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timing]\nrecharge_delay_ms = 900\n").expect("write config");

        let store = ConfigStore::new(Config::default(), path.clone())
            .with_overrides(|config| config.timing.login_delay_ms = 5);
        assert_eq!(store.get().timing.login_delay_ms, 5);

        store.reload().expect("reload");
        let config = store.get();
        assert_eq!(config.timing.recharge_delay_ms, 900);
        assert_eq!(config.timing.login_delay_ms, 5);
    }

    #[test]
    fn failed_reload_keeps_previous_config() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timing]\ntick_rate_ms = 0\n").expect("write config");

        let mut initial = Config::default();
        initial.timing.tick_rate_ms = 100;
        let store = ConfigStore::new(initial, path);
        assert!(store.reload().is_err());
        assert_eq!(store.get().timing.tick_rate_ms, 100);
    }
}
