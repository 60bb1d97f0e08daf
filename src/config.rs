//! Startup configuration.
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file) and can be overridden on the command line. The API key is
//! mandatory: without it the application refuses to start.

use crate::cli::CliArgs;
use crate::error::{Result, SolverError};

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env`, the environment and CLI overrides
    pub fn load(args: &CliArgs) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!("Loaded .env from: {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found, using process environment"),
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok(), args)
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, args: &CliArgs) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(API_KEY_FALLBACK_VAR))
            .ok_or_else(|| SolverError::Config {
                message: format!("{API_KEY_VAR} environment variable not set."),
            })?;

        let model = args
            .model
            .clone()
            .or_else(|| non_blank(MODEL_VAR))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = args
            .api_base
            .clone()
            .or_else(|| non_blank(API_BASE_VAR))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let config = Self {
            api_key: api_key.trim().to_string(),
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        };
        tracing::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[]), &CliArgs::default()).unwrap_err();
        assert_eq!(err.to_string(), "API_KEY environment variable not set.");
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let result = Config::from_lookup(lookup(&[("API_KEY", "   ")]), &CliArgs::default());
        assert!(matches!(result, Err(SolverError::Config { .. })));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")]), &CliArgs::default()).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_fallback_key_name() {
        let config =
            Config::from_lookup(lookup(&[("GEMINI_API_KEY", "other")]), &CliArgs::default()).unwrap();
        assert_eq!(config.api_key, "other");
    }

    #[test]
    fn test_cli_overrides_environment() {
        let vars = lookup(&[
            ("API_KEY", "secret"),
            ("GEMINI_MODEL", "env-model"),
            ("GEMINI_API_BASE", "http://env.example"),
        ]);
        let args = CliArgs {
            model: Some("cli-model".to_string()),
            api_base: Some("http://localhost:8080/".to_string()),
            ..CliArgs::default()
        };
        let config = Config::from_lookup(vars, &args).unwrap();
        assert_eq!(config.model, "cli-model");
        assert_eq!(config.api_base, "http://localhost:8080");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let vars = lookup(&[("API_KEY", "secret"), ("GEMINI_MODEL", "env-model")]);
        let config = Config::from_lookup(vars, &CliArgs::default()).unwrap();
        assert_eq!(config.model, "env-model");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")]), &CliArgs::default()).unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
