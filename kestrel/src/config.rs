use std::{path::Path, time::Duration};

use kestrel_core::ToastSink;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub server: kestrel_shared::config::Server,
    #[serde(default)]
    pub search: kestrel_shared::config::Search,
    #[serde(default)]
    pub notifications: Notifications,
}
impl Config {
    pub const FILENAME: &str = "kestrel.toml";

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        kestrel_shared::config::load_config(path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Notifications {
    pub toast_duration_ms: u64,
}
impl Notifications {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
impl Default for Notifications {
    fn default() -> Self {
        Self {
            toast_duration_ms: ToastSink::DEFAULT_DURATION.as_millis() as u64,
        }
    }
}
