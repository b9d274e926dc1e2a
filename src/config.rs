use crate::error::{config_error, env_error, CalResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// Default interval between reminder checks, in seconds
pub const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 30;

/// Default locale for labels and notification text
pub const DEFAULT_LOCALE: &str = "en";

/// Optional file holding configuration overrides
pub const OVERRIDES_PATH: &str = "config/calendar.toml";

/// Main configuration structure for the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds between two reminder ticks
    pub reminder_interval_secs: u64,
    /// Locale used for weekday/month names and notification text
    pub locale: String,
    /// Whether to seed the demo events at startup
    pub seed_demo_events: bool,
}

/// Values that `config/calendar.toml` may override
#[derive(Debug, Default, Deserialize)]
struct Overrides {
    reminder_interval_secs: Option<u64>,
    locale: Option<String>,
    seed_demo_events: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminder_interval_secs: DEFAULT_REMINDER_INTERVAL_SECS,
            locale: DEFAULT_LOCALE.to_string(),
            seed_demo_events: true,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CalResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::from_lookup(|key| env::var(key).ok())?;

        if Path::new(OVERRIDES_PATH).exists() {
            let content = fs::read_to_string(OVERRIDES_PATH)?;
            config.apply_overrides(&content)?;
            info!("Applied configuration overrides from {}", OVERRIDES_PATH);
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from the defaults and the given variable lookup
    pub fn from_lookup<F>(lookup: F) -> CalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup("REMINDER_INTERVAL_SECS") {
            config.reminder_interval_secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| env_error("Invalid REMINDER_INTERVAL_SECS format"))?;
        }

        if let Some(locale) = lookup("CALENDAR_LOCALE") {
            config.locale = locale;
        }

        if let Some(raw) = lookup("CALENDAR_SEED_DEMO") {
            config.seed_demo_events =
                parse_flag(&raw).ok_or_else(|| env_error("Invalid CALENDAR_SEED_DEMO format"))?;
        }

        Ok(config)
    }

    /// Merge TOML overrides on top of the current values
    pub fn apply_overrides(&mut self, content: &str) -> CalResult<()> {
        let overrides: Overrides = toml::from_str(content)?;

        if let Some(secs) = overrides.reminder_interval_secs {
            self.reminder_interval_secs = secs;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(seed) = overrides.seed_demo_events {
            self.seed_demo_events = seed;
        }

        Ok(())
    }

    /// Reject values the scheduler cannot run with
    pub fn validate(&self) -> CalResult<()> {
        if self.reminder_interval_secs == 0 {
            return Err(config_error("reminder_interval_secs must be greater than zero"));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reminder_interval_secs, 30);
        assert_eq!(config.locale, "en");
        assert!(config.seed_demo_events);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_merge_only_present_keys() {
        let mut config = Config::default();
        config
            .apply_overrides("locale = \"fi\"\nseed_demo_events = false\n")
            .unwrap();

        assert_eq!(config.locale, "fi");
        assert!(!config.seed_demo_events);
        assert_eq!(config.reminder_interval_secs, 30);
    }

    #[test]
    fn test_malformed_overrides_are_rejected() {
        let mut config = Config::default();
        assert!(config.apply_overrides("reminder_interval_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let config = Config {
            reminder_interval_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("REMINDER_INTERVAL_SECS", " 5 "),
            ("CALENDAR_LOCALE", "fi"),
            ("CALENDAR_SEED_DEMO", "off"),
        ]))
        .unwrap();

        assert_eq!(config.reminder_interval_secs, 5);
        assert_eq!(config.locale, "fi");
        assert!(!config.seed_demo_events);
    }

    #[test]
    fn test_invalid_interval_variable() {
        let result = Config::from_lookup(lookup_from(&[("REMINDER_INTERVAL_SECS", "soon")]));
        assert!(matches!(result, Err(Error::Environment(_))));

        let result = Config::from_lookup(lookup_from(&[("REMINDER_INTERVAL_SECS", "-1")]));
        assert!(matches!(result, Err(Error::Environment(_))));
    }

    #[test]
    fn test_invalid_seed_flag_variable() {
        let result = Config::from_lookup(lookup_from(&[("CALENDAR_SEED_DEMO", "maybe")]));
        assert!(matches!(result, Err(Error::Environment(_))));
    }
}
