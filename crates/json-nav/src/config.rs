//! Navigator configuration.
//!
//! A [`NavigatorConfig`] is a plain value bound into a navigator at
//! construction. There is no process-wide decoder setting, so navigators with
//! different engines can coexist in one process.

use serde::Deserialize;

use crate::error::ConfigError;

/// The built-in engine used for raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Toml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Selects the engine when the navigator is built with
    /// [`Navigator::from_config`](crate::Navigator::from_config).
    pub format: Format,
    /// Maximum number of characters of raw input rendered into a decoding
    /// error. `None` renders the whole input.
    pub diagnostic_limit: Option<usize>,
}

impl NavigatorConfig {
    /// Parses a configuration from TOML text. Missing fields take defaults.
    ///
    /// ```
    /// use json_nav::{Format, NavigatorConfig};
    ///
    /// let config = NavigatorConfig::from_toml_str("format = \"toml\"").unwrap();
    /// assert_eq!(config.format, Format::Toml);
    /// assert_eq!(config.diagnostic_limit, None);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders raw input for diagnostics, honoring `diagnostic_limit`.
    pub(crate) fn render_input(&self, bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        match self.diagnostic_limit {
            Some(limit) if text.chars().count() > limit => {
                let mut out: String = text.chars().take(limit).collect();
                out.push_str(&format!("... ({} bytes total)", bytes.len()));
                out
            }
            _ => text.into_owned(),
        }
    }
}
