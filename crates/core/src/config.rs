use crate::types::SETTLE_DELAY_MS;

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// RNG seed for tile spawns
    pub seed: u32,
    /// Window after a successful move during which further moves are rejected
    pub settle_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// Create config from environment variables
    ///
    /// - `TWENTY48_SEED`: spawn RNG seed (default: `fallback_seed`)
    /// - `TWENTY48_SETTLE_MS`: settle delay in milliseconds (default: 300)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env(fallback_seed: u32) -> Self {
        use std::env;

        let seed = env::var("TWENTY48_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(fallback_seed);

        let settle_delay_ms = env::var("TWENTY48_SETTLE_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(SETTLE_DELAY_MS);

        Self {
            seed,
            settle_delay_ms,
        }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
