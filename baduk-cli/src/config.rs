use std::fmt;

use baduk_engine::selector::Difficulty;
use baduk_engine::{SessionConfig, Stone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value '{}' for {}", self.value, self.var)
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub session: SessionConfig,
    pub opponent: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            session: SessionConfig::default(),
            opponent: "baduk-ai".to_string(),
        }
    }
}

impl CliConfig {
    /// Read `BADUK_DIFFICULTY`, `BADUK_THINK_MS`, `BADUK_HUMAN` and
    /// `BADUK_OPPONENT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(raw) = lookup("BADUK_DIFFICULTY") {
            let level = parse_var("BADUK_DIFFICULTY", &raw, |s| s.parse::<u32>().ok())?;
            config.session.difficulty = Difficulty(level);
        }
        if let Some(raw) = lookup("BADUK_THINK_MS") {
            config.session.think_delay_ms =
                parse_var("BADUK_THINK_MS", &raw, |s| s.parse::<u64>().ok())?;
        }
        if let Some(raw) = lookup("BADUK_HUMAN") {
            config.session.human = parse_var("BADUK_HUMAN", &raw, |s| {
                match s.to_ascii_lowercase().as_str() {
                    "b" | "black" => Some(Stone::Black),
                    "w" | "white" => Some(Stone::White),
                    _ => None,
                }
            })?;
        }
        if let Some(name) = lookup("BADUK_OPPONENT").filter(|s| !s.trim().is_empty()) {
            config.opponent = name.trim().to_string();
        }

        Ok(config)
    }
}

fn parse_var<T>(
    var: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parse(raw.trim()).ok_or_else(|| ConfigError {
        var,
        value: raw.to_string(),
    })
}
