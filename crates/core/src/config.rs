/// Default prefix placed in front of currency amounts.
pub const DEFAULT_CURRENCY_PREFIX: &str = "RM";

/// Formatting settings loaded from environment variables.
///
/// All fields have defaults matching the application's historical output,
/// so `FormatConfig::default()` is what every formatter uses unless a caller
/// passes its own settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Currency code printed before amounts (default: `RM`).
    pub currency_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl FormatConfig {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var           | Default |
    /// |-------------------|---------|
    /// | `CURRENCY_PREFIX` | `RM`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_prefix = lookup("CURRENCY_PREFIX")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY_PREFIX.into());

        Self { currency_prefix }
    }
}
