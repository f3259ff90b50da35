//! Workload, kernels and lifecycle for the vadd micro-benchmark.
//!
//! The benchmark fills a 32-lane input with `0..32`, accumulates it onto a
//! copy of itself a fixed number of times with vector adds, and checks the
//! result against `input * (iterations + 1)`. The C-ABI hooks that an
//! external harness calls live in `vadd-ffi`; this crate holds everything
//! they delegate to.
//!
//! Only [`kernel`]'s inline-assembly backend contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod benchmark;
pub mod config;
pub mod error;
pub mod kernel;
pub mod workload;

pub use benchmark::{Benchmark, Verification};
pub use config::BenchConfig;
pub use error::{BenchError, ConfigError, IterationKind, KernelError};
#[cfg(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_feature = "v"
))]
pub use kernel::RvvKernel;
pub use kernel::{DefaultKernel, Kernel, ScalarKernel};
pub use workload::{Word, Workload, LEN};
