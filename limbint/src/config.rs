//! Kernel tuning knobs.
//!
//! None of these change results, only how work is scheduled. The active
//! configuration is process-wide; it can be built from TOML text, from
//! environment variables, or in code, and is swapped in with [`install`].
//!
//! ```
//! use limbint::config::{self, KernelConfig};
//!
//! let cfg = KernelConfig::from_toml_str("min_parallel_len = 256").unwrap();
//! assert_eq!(cfg.min_parallel_len, 256);
//! assert_eq!(cfg.square_cutoff, 1);
//! config::install(cfg).unwrap();
//! assert_eq!(config::current().min_parallel_len, 256);
//! # config::install(KernelConfig::default()).unwrap();
//! ```

use parking_lot::{const_rwlock, RwLock};
use serde::{Deserialize, Serialize};

use crate::error::{BigIntError, Result};

pub const ENV_MIN_PARALLEL_LEN: &str = "LIMBINT_MIN_PARALLEL_LEN";
pub const ENV_SQUARE_CUTOFF: &str = "LIMBINT_SQUARE_CUTOFF";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// Index ranges shorter than this run on the calling thread instead of
    /// being fanned out to the rayon pool.
    pub min_parallel_len: usize,
    /// Operands of at most this many limbs are squared by a direct multiply.
    pub square_cutoff: usize,
}

impl KernelConfig {
    pub const DEFAULT: Self = Self {
        min_parallel_len: 64,
        square_cutoff: 1,
    };

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).map_err(|e| BigIntError::Config(e.to_string()))?;
        cfg.validate()
    }

    /// Start from the defaults and apply any `LIMBINT_*` overrides.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::DEFAULT;
        if let Some(v) = read_env(ENV_MIN_PARALLEL_LEN)? {
            cfg.min_parallel_len = v;
        }
        if let Some(v) = read_env(ENV_SQUARE_CUTOFF)? {
            cfg.square_cutoff = v;
        }
        cfg.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.min_parallel_len == 0 {
            return Err(BigIntError::Config(
                "min_parallel_len must be at least 1".into(),
            ));
        }
        if self.square_cutoff == 0 {
            return Err(BigIntError::Config(
                "square_cutoff must be at least 1".into(),
            ));
        }
        Ok(self)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn read_env(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| BigIntError::Config(format!("{key}={raw:?}: {e}"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(BigIntError::Config(format!("{key}: {e}"))),
    }
}

static ACTIVE: RwLock<KernelConfig> = const_rwlock(KernelConfig::DEFAULT);

/// Replace the process-wide configuration, returning the previous one.
///
/// A configuration with a zero field is rejected and the active one is
/// left in place.
pub fn install(cfg: KernelConfig) -> Result<KernelConfig> {
    let cfg = cfg.validate()?;
    tracing::debug!(?cfg, "installing kernel config");
    Ok(std::mem::replace(&mut *ACTIVE.write(), cfg))
}

/// Snapshot of the process-wide configuration.
#[inline]
pub fn current() -> KernelConfig {
    *ACTIVE.read()
}
