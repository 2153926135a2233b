//! Runtime configuration read from the environment (and `.env`, if present).
//!
//! | Variable                  | Meaning                                  | Default |
//! |---------------------------|------------------------------------------|---------|
//! | `PORTFOLIO_CATALOG_PATH`  | JSON intent catalog to load              | built-in |
//! | `PORTFOLIO_TYPING_MIN_MS` | Lower bound of the simulated typing delay | 1000    |
//! | `PORTFOLIO_TYPING_MAX_MS` | Upper bound of the simulated typing delay | 2000    |
//! | `PORTFOLIO_RNG_SEED`      | Seed for reproducible response selection | random  |
//! | `PORTFOLIO_LOG_JSON`      | `1`/`true` switches to bunyan JSON logs   | off     |

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::brain::{Catalog, IntentClassifier, SeededPicker};
use crate::error::AppError;

pub const ENV_CATALOG_PATH: &str = "PORTFOLIO_CATALOG_PATH";
pub const ENV_TYPING_MIN_MS: &str = "PORTFOLIO_TYPING_MIN_MS";
pub const ENV_TYPING_MAX_MS: &str = "PORTFOLIO_TYPING_MAX_MS";
pub const ENV_RNG_SEED: &str = "PORTFOLIO_RNG_SEED";
pub const ENV_LOG_JSON: &str = "PORTFOLIO_LOG_JSON";

const DEFAULT_TYPING_MIN_MS: u64 = 1000;
const DEFAULT_TYPING_MAX_MS: u64 = 2000;

/// Bounds of the artificial "assistant is typing" pause, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl TypingDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, AppError> {
        if min_ms > max_ms {
            return Err(AppError::Config(format!(
                "Typing delay minimum ({} ms) exceeds maximum ({} ms)",
                min_ms, max_ms
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// No pause at all.
    pub fn instant() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_TYPING_MIN_MS,
            max_ms: DEFAULT_TYPING_MAX_MS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub typing_delay: TypingDelay,
    pub rng_seed: Option<u64>,
    pub log_json: bool,
}

impl AppConfig {
    /// Load `.env` (ignored when missing) and read the configuration.
    pub fn load() -> Result<Self, AppError> {
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read the configuration from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let catalog_path = non_empty_var(ENV_CATALOG_PATH).map(PathBuf::from);

        let min_ms = parse_var(ENV_TYPING_MIN_MS)?.unwrap_or(DEFAULT_TYPING_MIN_MS);
        let max_ms = parse_var(ENV_TYPING_MAX_MS)?.unwrap_or(DEFAULT_TYPING_MAX_MS);
        let typing_delay = TypingDelay::new(min_ms, max_ms)?;

        let rng_seed = parse_var(ENV_RNG_SEED)?;

        let log_json = non_empty_var(ENV_LOG_JSON)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            catalog_path,
            typing_delay,
            rng_seed,
            log_json,
        })
    }

    /// Load the configured catalog, or the built-in portfolio one.
    pub fn catalog(&self) -> Result<Catalog, AppError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::portfolio()),
        }
    }

    /// Build the classifier for a catalog, honouring the configured seed.
    pub fn classifier(&self, catalog: Catalog) -> Result<IntentClassifier, AppError> {
        let table = Arc::new(catalog.into_table()?);
        Ok(match self.rng_seed {
            Some(seed) => IntentClassifier::with_picker(table, SeededPicker::new(seed)),
            None => IntentClassifier::new(table),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var(key: &str) -> Result<Option<u64>, AppError> {
    match non_empty_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} must be a non-negative integer: {}", key, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        ENV_CATALOG_PATH,
        ENV_TYPING_MIN_MS,
        ENV_TYPING_MAX_MS,
        ENV_RNG_SEED,
        ENV_LOG_JSON,
    ];

    /// Every variable unset except the given overrides.
    fn env_with(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS
            .iter()
            .map(|key| {
                let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(env_with(&[]), || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.typing_delay, TypingDelay::new(1000, 2000).unwrap());
        });
    }

    #[test]
    fn test_reads_all_variables() {
        let vars = env_with(&[
            (ENV_CATALOG_PATH, "/tmp/catalog.json"),
            (ENV_TYPING_MIN_MS, "10"),
            (ENV_TYPING_MAX_MS, "20"),
            (ENV_RNG_SEED, "7"),
            (ENV_LOG_JSON, "TRUE"),
        ]);
        temp_env::with_vars(vars, || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
            assert_eq!(config.typing_delay, TypingDelay { min_ms: 10, max_ms: 20 });
            assert_eq!(config.rng_seed, Some(7));
            assert!(config.log_json);
        });
    }

    #[test]
    fn test_malformed_number_is_config_error() {
        let vars = env_with(&[(ENV_RNG_SEED, "seven")]);
        temp_env::with_vars(vars, || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(ref m) if m.contains(ENV_RNG_SEED)));
        });
    }

    #[test]
    fn test_inverted_delay_bounds_rejected() {
        let vars = env_with(&[(ENV_TYPING_MIN_MS, "500"), (ENV_TYPING_MAX_MS, "100")]);
        temp_env::with_vars(vars, || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_builtin_catalog_when_no_path() {
        let config = AppConfig::default();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.categories.len(), 11);
    }

    #[test]
    fn test_seeded_classifier_is_reproducible() {
        let config = AppConfig {
            rng_seed: Some(99),
            ..AppConfig::default()
        };
        let a = config.classifier(Catalog::portfolio()).unwrap();
        let b = config.classifier(Catalog::portfolio()).unwrap();
        for _ in 0..10 {
            assert_eq!(a.classify("hello"), b.classify("hello"));
        }
    }
}
