//! Runtime configuration for the terminal game, read from `BLOCKS_*`
//! environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::types::{MIN_TICK_MS, TICK_MS};

/// Default time the GAME OVER screen stays up before the process exits.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 1500;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` picks a random one at startup.
    pub seed: Option<u64>,
    /// Gravity interval.
    pub tick_ms: u32,
    /// Log file. Logging stays off without one, since the terminal is in
    /// raw alternate-screen mode.
    pub log_path: Option<String>,
    pub exit_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Also returns a message for every variable that was ignored or
    /// adjusted. The caller logs them once its logger is installed, since
    /// the log target itself comes from this config.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], with variables looked up through
    /// `var` instead of the process environment.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let seed = parse_var(&var, "BLOCKS_SEED", &mut warnings);

        let tick_ms = parse_var::<u32>(&var, "BLOCKS_TICK_MS", &mut warnings)
            .map(|ms| {
                if ms < MIN_TICK_MS {
                    warnings.push(format!(
                        "BLOCKS_TICK_MS={} below {}, clamping",
                        ms, MIN_TICK_MS
                    ));
                }
                ms.max(MIN_TICK_MS)
            })
            .unwrap_or(defaults.tick_ms);

        let log_path = var("BLOCKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let exit_delay_ms = parse_var(&var, "BLOCKS_EXIT_DELAY_MS", &mut warnings)
            .unwrap_or(defaults.exit_delay_ms);

        let config = Self {
            seed,
            tick_ms,
            log_path,
            exit_delay_ms,
        };
        (config, warnings)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// Unset, blank and unparsable values all read as `None`; unparsable ones
/// also leave a message in `warnings`.
fn parse_var<T: FromStr>(
    var: &dyn Fn(&str) -> Option<String>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = var(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("ignoring invalid {}={:?}", key, raw));
            None
        }
    }
}
