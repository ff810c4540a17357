use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOCALE: &str = "fr-FR";
pub const DEFAULT_CURRENCY: &str = "XOF";
const DATA_DIR_NAME: &str = "pat_finances";

/// User-configurable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_color_enabled")]
    pub color_enabled: bool,

    /// Where collections and snapshots live. Defaults to the platform data
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Snapshots kept before older ones are pruned.
    #[serde(default = "Config::default_snapshot_retention")]
    pub snapshot_retention: usize,

    /// Take a snapshot before every import.
    #[serde(default = "Config::default_snapshot_before_import")]
    pub snapshot_before_import: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            color_enabled: Self::default_color_enabled(),
            data_dir: None,
            snapshot_retention: Self::default_snapshot_retention(),
            snapshot_before_import: Self::default_snapshot_before_import(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        DEFAULT_LOCALE.into()
    }

    pub fn default_currency() -> String {
        DEFAULT_CURRENCY.into()
    }

    pub fn default_color_enabled() -> bool {
        true
    }

    pub fn default_snapshot_retention() -> usize {
        5
    }

    pub fn default_snapshot_before_import() -> bool {
        true
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DATA_DIR_NAME)
    }
}
