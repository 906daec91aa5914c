//! Split settings

use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::partition::ProbeStrategy;

/// Size limit used when none is given, in mebibytes
pub const DEFAULT_MAX_SIZE_MB: u64 = 20;

/// Convert binary mebibytes to bytes (`mb * 1024 * 1024`)
pub fn mebibytes_to_bytes(mb: u64) -> Result<u64, SplitError> {
    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| SplitError::Usage(format!("Maximum size of {} MB is too large", mb)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Largest allowed output file, in bytes
    pub max_size_bytes: u64,
    #[serde(default)]
    pub strategy: ProbeStrategy,
    /// Plan the parts without writing any of them
    #[serde(default)]
    pub dry_run: bool,
}

impl SplitConfig {
    pub fn new(max_size_bytes: u64) -> Self {
        Self {
            max_size_bytes,
            strategy: ProbeStrategy::default(),
            dry_run: false,
        }
    }

    pub fn from_mebibytes(mb: u64) -> Result<Self, SplitError> {
        if mb == 0 {
            return Err(SplitError::Usage(
                "Maximum size must be at least 1 MB".into(),
            ));
        }
        Ok(Self::new(mebibytes_to_bytes(mb)?))
    }

    pub fn with_strategy(mut self, strategy: ProbeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE_MB * 1024 * 1024)
    }
}
