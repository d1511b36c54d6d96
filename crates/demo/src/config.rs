//! Demo configuration loaded from environment variables.

/// How the demo renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A pretty-printed JSON report.
    Json,
}

impl OutputFormat {
    /// Parses a format name, falling back to [`OutputFormat::Text`] for
    /// anything other than `json`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"warn"`)
/// - `COFFEE_SHOP_OUTPUT`: `text` or `json` (default: `text`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub output: OutputFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
            output: std::env::var("COFFEE_SHOP_OUTPUT")
                .map(|v| OutputFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}
