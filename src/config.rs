use std::env;

/// Default fan-out for synthesized collections (e.g. addresses per customer)
pub const DEFAULT_COLLECTION_SIZE: usize = 3;

/// Default seed for the deterministic scalar generator
pub const DEFAULT_SEED: u64 = 0;

/// Tunables for specimen synthesis
#[derive(Debug, Clone)]
pub struct Settings {
    /// Seed for the bounded-random scalar generator
    pub seed: u64,
    /// How many related rows a synthesizer fans out per collection field
    pub collection_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            collection_size: DEFAULT_COLLECTION_SIZE,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            seed: env::var("FIXTURAL_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEED),
            collection_size: env::var("FIXTURAL_COLLECTION_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COLLECTION_SIZE),
        }
    }

    /// Same settings with a different seed (useful for independent fixtures)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
