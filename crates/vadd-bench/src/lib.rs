//! Benchmark profiles for the vadd micro-benchmark.
//!
//! - [`harness_profile`]: the shipped 32-lane, 50-iteration configuration
//! - [`long_profile`]: same buffers, caller-chosen iteration count
//! - [`wide_profile`]: 1024 lanes, so the vector loop spans many chunks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vadd_core::{BenchConfig, Benchmark, ConfigError, Kernel, LEN};

/// Lane count of [`wide_profile`].
pub const WIDE_LEN: usize = 1024;

/// The configuration the C harness runs.
pub fn harness_profile<K: Kernel>(kernel: K) -> Benchmark<K, LEN> {
    Benchmark::new(kernel)
}

/// Harness buffers with `body_iterations` rounds per run.
pub fn long_profile<K: Kernel>(
    kernel: K,
    body_iterations: u32,
) -> Result<Benchmark<K, LEN>, ConfigError> {
    Benchmark::with_config(
        kernel,
        BenchConfig {
            body_iterations,
            ..BenchConfig::DEFAULT
        },
    )
}

/// [`WIDE_LEN`] lanes with the default iteration counts.
pub fn wide_profile<K: Kernel>(kernel: K) -> Benchmark<K, WIDE_LEN> {
    Benchmark::new(kernel)
}
