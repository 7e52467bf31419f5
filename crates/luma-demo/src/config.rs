//! Runtime configuration for the demo host.

use std::str::FromStr;

use crate::error::DemoError;

/// Default foreground color.
const DEFAULT_FOREGROUND: &str = "#000000";
/// Default background color.
const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable summary.
    #[default]
    Text,
    /// One `CoreToUi` JSON message.
    Json,
    /// Read `UiToCore` JSON lines from stdin, answer each with a `CoreToUi` line.
    Bridge,
}

impl FromStr for OutputMode {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "bridge" => Ok(Self::Bridge),
            other => Err(DemoError::InvalidOutput(other.to_string())),
        }
    }
}

/// Runtime configuration for the Luma demo host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Foreground color as hex text.
    pub foreground: String,
    /// Background color as hex text.
    pub background: String,
    /// Output format.
    pub output: OutputMode,
}

impl AppConfig {
    /// Build a config from an environment lookup (`LUMA_FOREGROUND`,
    /// `LUMA_BACKGROUND`, `LUMA_OUTPUT`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DemoError> {
        let output = match lookup("LUMA_OUTPUT") {
            Some(mode) => mode.parse()?,
            None => OutputMode::default(),
        };
        let foreground = lookup("LUMA_FOREGROUND");
        let background = lookup("LUMA_BACKGROUND");
        Ok(Self {
            foreground: foreground.unwrap_or_else(|| DEFAULT_FOREGROUND.into()),
            background: background.unwrap_or_else(|| DEFAULT_BACKGROUND.into()),
            output,
        })
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply positional `<foreground> [background]` arguments.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(fg) = args.next() {
            self.foreground = fg;
        }
        if let Some(bg) = args.next() {
            self.background = bg;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.into(),
            background: DEFAULT_BACKGROUND.into(),
            output: OutputMode::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let lookup = lookup_from(&[("LUMA_FOREGROUND", "#777777"), ("LUMA_OUTPUT", "JSON")]);
        let config = AppConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.foreground, "#777777");
        assert_eq!(config.background, DEFAULT_BACKGROUND);
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn test_unknown_output_mode_is_rejected() {
        let lookup = lookup_from(&[("LUMA_OUTPUT", "yaml")]);
        let err = AppConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(err, DemoError::InvalidOutput(mode) if mode == "yaml"));
    }

    #[test]
    fn test_positional_args_override_colors() {
        let config = AppConfig::default().with_args(["#123".to_string()]);
        assert_eq!(config.foreground, "#123");
        assert_eq!(config.background, DEFAULT_BACKGROUND);

        let args = ["#fff".to_string(), "#000".to_string()];
        let config = AppConfig::default().with_args(args);
        assert_eq!(config.foreground, "#fff");
        assert_eq!(config.background, "#000");
    }
}
