use derive_more::Display;
use fnv::FnvHasher;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// RNG seed for everything random about a map.
///
/// When deserializing, this type supports a few options:
/// - If the value is an integer that fits into `u64`, use that value
/// - If it's a string that can be parsed into a `u64`, use the parsed value
/// - If it's any other string, just keep the string
/// - If it's anything else (negative number, float, array, etc.), error
///
/// A text seed is hashed into a `u64` when it comes time to use it.
///
/// Seeds are always serialized as a **string**. JSON and TOML don't handle
/// 64-bit unsigned integers well, and a stringified int parses back into the
/// same seed anyway.
#[derive(Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSeed", into = "String")]
pub enum Seed {
    /// An integer seed, which can be used directly
    Int(u64),
    /// A textual string, which will be hashed into a u64 before use
    Text(String),
}

impl Seed {
    /// A random integer seed
    pub fn random() -> Self {
        Self::Int(rand::random())
    }

    /// Convert the seed to a `u64`, so it can actually be used in an RNG
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
        }
    }

    /// A fresh RNG seeded from this seed. Every call gives an RNG in the same
    /// state.
    pub fn rng(&self) -> Pcg64 {
        Pcg64::seed_from_u64(self.to_u64())
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

// Parse as an int if possible, otherwise keep the text to be hashed later
impl From<&str> for Seed {
    fn from(seed_str: &str) -> Self {
        match seed_str.parse::<u64>() {
            Ok(seed) => Self::Int(seed),
            Err(_) => Self::Text(seed_str.into()),
        }
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_string()
    }
}

/// The shapes a seed can take in a config file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Int(u64),
    Text(String),
}

impl From<RawSeed> for Seed {
    fn from(raw: RawSeed) -> Self {
        match raw {
            RawSeed::Int(seed) => Self::Int(seed),
            RawSeed::Text(text) => text.as_str().into(),
        }
    }
}
