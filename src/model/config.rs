use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::task::Filter;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Filter active at startup
    #[serde(default)]
    pub default_filter: Filter,
    #[serde(default)]
    pub colors: PaletteOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            default_filter: Filter::All,
            colors: PaletteOverrides::default(),
        }
    }
}

/// Hex color overrides per palette slot, e.g. `background = "#101018"`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteOverrides {
    #[serde(default)]
    pub dark: HashMap<String, String>,
    #[serde(default)]
    pub light: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}
