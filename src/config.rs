use crate::error::{config::ConfigError, AppError};

const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub discord_bot_token: String,

    /// Fallback tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present and valid
    /// - `Err(AppError::ConfigErr)` - The bot token is missing or blank
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        if discord_bot_token.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "DISCORD_BOT_TOKEN".to_string(),
                reason: "token is empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            discord_bot_token,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading a configuration with only the bot token set.
    ///
    /// Expected: Ok with the token and the default log level
    #[test]
    fn loads_token_with_default_log_level() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_bot_token, "abc");
        assert_eq!(config.log_level, "info");
    }

    /// Tests that an explicit log level overrides the default.
    ///
    /// Expected: Ok with the configured log level
    #[test]
    fn reads_log_level() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
    }

    /// Tests that a missing bot token is reported by name.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar)
    #[test]
    fn missing_token_fails() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    /// Tests that a blank bot token is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar)
    #[test]
    fn blank_token_fails() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "   ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
