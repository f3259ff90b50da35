//! Iteration counts for the warm-up and timed runs.

use std::num::NonZeroU32;

use crate::error::{ConfigError, IterationKind};

/// Iteration counts handed to the kernel by the lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Accumulation rounds per `benchmark()` call. Default: 50.
    pub body_iterations: u32,
    /// Accumulation rounds per `warm_caches()` call. Default: 4.
    pub warm_iterations: u32,
}

impl BenchConfig {
    /// The counts used by the harness build.
    pub const DEFAULT: Self = Self {
        body_iterations: 50,
        warm_iterations: 4,
    };

    /// Check that both iteration counts are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.body()?;
        self.warm()?;
        Ok(())
    }

    pub(crate) fn body(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.body_iterations).ok_or(ConfigError::ZeroIterations {
            which: IterationKind::Body,
        })
    }

    pub(crate) fn warm(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.warm_iterations).ok_or(ConfigError::ZeroIterations {
            which: IterationKind::Warm,
        })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_harness_build() {
        let c = BenchConfig::default();
        assert_eq!(c.body_iterations, 50);
        assert_eq!(c.warm_iterations, 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_body_rejected() {
        let c = BenchConfig {
            body_iterations: 0,
            ..BenchConfig::DEFAULT
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZeroIterations {
                which: IterationKind::Body
            })
        );
    }

    #[test]
    fn zero_warm_rejected() {
        let c = BenchConfig {
            warm_iterations: 0,
            ..BenchConfig::DEFAULT
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZeroIterations {
                which: IterationKind::Warm
            })
        );
    }
}
