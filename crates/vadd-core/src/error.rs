//! Error types for the vadd micro-benchmark.
//!
//! Kernel errors come from a single [`Kernel::run`](crate::Kernel::run)
//! call; config errors come from [`BenchConfig::validate`](crate::BenchConfig::validate).
//! [`BenchError`] wraps either for the lifecycle methods.

use std::error::Error;
use std::fmt;

/// Errors returned by a kernel invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Input and output buffers have different lengths.
    LengthMismatch {
        /// Number of input elements.
        input: usize,
        /// Number of output elements.
        output: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { input, output } => {
                write!(f, "input has {input} elements but output has {output}")
            }
        }
    }
}

impl Error for KernelError {}

/// Which iteration count a [`ConfigError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationKind {
    /// The timed `benchmark()` run.
    Body,
    /// The `warm_caches()` run.
    Warm,
}

impl fmt::Display for IterationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => f.write_str("body_iterations"),
            Self::Warm => f.write_str("warm_iterations"),
        }
    }
}

/// Errors detected during [`BenchConfig::validate()`](crate::BenchConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An iteration count is zero. The hardware loop decrements before
    /// testing, so zero would wrap to 2^32 rounds.
    ZeroIterations {
        /// The offending field.
        which: IterationKind,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterations { which } => write!(f, "{which} must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from a [`Benchmark`](crate::Benchmark) lifecycle call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The iteration count for this call is invalid.
    Config(ConfigError),
    /// The kernel rejected its buffers.
    Kernel(KernelError),
}

impl BenchError {
    /// Integer status for the harness ABI: -1 for a kernel failure, -2 for
    /// an invalid iteration count. Success is 0 and never produced here.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Kernel(_) => -1,
            Self::Config(_) => -2,
        }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Kernel(e) => write!(f, "kernel: {e}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Kernel(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<KernelError> for BenchError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display() {
        let e = KernelError::LengthMismatch {
            input: 32,
            output: 16,
        };
        assert_eq!(e.to_string(), "input has 32 elements but output has 16");
    }

    #[test]
    fn zero_iterations_display_names_field() {
        let body = ConfigError::ZeroIterations {
            which: IterationKind::Body,
        };
        let warm = ConfigError::ZeroIterations {
            which: IterationKind::Warm,
        };
        assert_eq!(body.to_string(), "body_iterations must be at least 1");
        assert_eq!(warm.to_string(), "warm_iterations must be at least 1");
    }

    #[test]
    fn bench_error_wraps_source() {
        let e: BenchError = KernelError::LengthMismatch {
            input: 1,
            output: 2,
        }
        .into();
        assert!(e.to_string().starts_with("kernel: "));
        assert!(e.source().is_some());
    }

    #[test]
    fn status_codes_are_distinct_and_negative() {
        let kernel = BenchError::Kernel(KernelError::LengthMismatch {
            input: 1,
            output: 2,
        });
        let config = BenchError::Config(ConfigError::ZeroIterations {
            which: IterationKind::Body,
        });
        assert_eq!(kernel.status_code(), -1);
        assert_eq!(config.status_code(), -2);
    }
}
