//! Verifier configuration.

use serde::{Deserialize, Serialize};

/// Default bound on hash-to-curve candidates.
///
/// Each candidate lands on the curve with probability about 1/2, so
/// exhausting 256 attempts does not happen for honest inputs.
pub const DEFAULT_MAX_HASH_TO_CURVE_ATTEMPTS: u32 = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfConfig {
    /// Maximum number of try-and-increment candidates in hash-to-curve.
    #[serde(default = "default_max_hash_to_curve_attempts")]
    pub max_hash_to_curve_attempts: u32,
}

fn default_max_hash_to_curve_attempts() -> u32 {
    DEFAULT_MAX_HASH_TO_CURVE_ATTEMPTS
}

impl Default for VrfConfig {
    fn default() -> Self {
        Self {
            max_hash_to_curve_attempts: DEFAULT_MAX_HASH_TO_CURVE_ATTEMPTS,
        }
    }
}
