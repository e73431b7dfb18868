use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_MAX_COMMENTS: u32 = 50;
pub const MIN_COMMENTS: u32 = 10;
pub const MAX_COMMENTS: u32 = 100;
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 120;
const DEFAULT_SESSION_SWEEP_SECONDS: u64 = 60;
/// One year; chrono durations overflow long before `i64::MAX` minutes.
const MAX_SESSION_IDLE_MINUTES: i64 = 525_600;
/// One day.
const MAX_SESSION_SWEEP_SECONDS: u64 = 86_400;

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub discord_token: String,
    pub youtube_api_key: String,
    pub default_max_comments: u32,
    pub session_idle_minutes: i64,
    pub session_sweep_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let default_max_comments =
            parse_or(&lookup, "DEFAULT_MAX_COMMENTS", DEFAULT_MAX_COMMENTS)?;
        if !(MIN_COMMENTS..=MAX_COMMENTS).contains(&default_max_comments) {
            return Err(ConfigError::Invalid {
                key: "DEFAULT_MAX_COMMENTS",
                reason: format!("must be between {} and {}", MIN_COMMENTS, MAX_COMMENTS),
            });
        }

        let session_idle_minutes =
            parse_or(&lookup, "SESSION_IDLE_MINUTES", DEFAULT_SESSION_IDLE_MINUTES)?;
        if !(1..=MAX_SESSION_IDLE_MINUTES).contains(&session_idle_minutes) {
            return Err(ConfigError::Invalid {
                key: "SESSION_IDLE_MINUTES",
                reason: format!("must be between 1 and {}", MAX_SESSION_IDLE_MINUTES),
            });
        }

        let session_sweep_seconds =
            parse_or(&lookup, "SESSION_SWEEP_SECONDS", DEFAULT_SESSION_SWEEP_SECONDS)?;
        if !(1..=MAX_SESSION_SWEEP_SECONDS).contains(&session_sweep_seconds) {
            return Err(ConfigError::Invalid {
                key: "SESSION_SWEEP_SECONDS",
                reason: format!("must be between 1 and {}", MAX_SESSION_SWEEP_SECONDS),
            });
        }

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            default_max_comments,
            session_idle_minutes,
            session_sweep_seconds,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [("DISCORD_TOKEN", "token"), ("YOUTUBE_API_KEY", "key")];

    #[test]
    fn defaults_apply() {
        let config = config(&REQUIRED).unwrap();
        assert_eq!(config.default_max_comments, 50);
        assert_eq!(config.session_idle_minutes, 120);
        assert_eq!(config.session_sweep_seconds, 60);
    }

    #[test]
    fn missing_token_is_reported() {
        assert_eq!(
            config(&[("YOUTUBE_API_KEY", "key")]),
            Err(ConfigError::Missing("DISCORD_TOKEN"))
        );
        assert_eq!(
            config(&[("DISCORD_TOKEN", "token"), ("YOUTUBE_API_KEY", "  ")]),
            Err(ConfigError::Missing("YOUTUBE_API_KEY"))
        );
    }

    #[test]
    fn overrides_are_validated() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DEFAULT_MAX_COMMENTS", "80"));
        vars.push(("SESSION_IDLE_MINUTES", "15"));
        let loaded = config(&vars).unwrap();
        assert_eq!(loaded.default_max_comments, 80);
        assert_eq!(loaded.session_idle_minutes, 15);

        let mut too_many = REQUIRED.to_vec();
        too_many.push(("DEFAULT_MAX_COMMENTS", "500"));
        assert!(matches!(
            config(&too_many),
            Err(ConfigError::Invalid { key: "DEFAULT_MAX_COMMENTS", .. })
        ));

        let mut garbage = REQUIRED.to_vec();
        garbage.push(("SESSION_SWEEP_SECONDS", "soon"));
        assert!(matches!(
            config(&garbage),
            Err(ConfigError::Invalid { key: "SESSION_SWEEP_SECONDS", .. })
        ));
    }

    #[test]
    fn session_timings_are_bounded() {
        let with = |key: &'static str, value: &'static str| {
            let mut vars = REQUIRED.to_vec();
            vars.push((key, value));
            config(&vars)
        };

        assert!(matches!(
            with("SESSION_IDLE_MINUTES", "9223372036854775807"),
            Err(ConfigError::Invalid { key: "SESSION_IDLE_MINUTES", .. })
        ));
        assert!(matches!(
            with("SESSION_IDLE_MINUTES", "0"),
            Err(ConfigError::Invalid { key: "SESSION_IDLE_MINUTES", .. })
        ));
        assert!(matches!(
            with("SESSION_SWEEP_SECONDS", "18446744073709551615"),
            Err(ConfigError::Invalid { key: "SESSION_SWEEP_SECONDS", .. })
        ));

        let longest = with("SESSION_IDLE_MINUTES", "525600").unwrap();
        // the sweeper builds this duration at startup
        assert_eq!(
            chrono::Duration::minutes(longest.session_idle_minutes).num_days(),
            365
        );
    }
}
