//! Status codes returned by `benchmark()`.
//!
//! Harnesses ignore the value, but it is ABI-stable so a debugger or a
//! custom driver can tell why a run did nothing.

use vadd_core::BenchError;

/// C-compatible status code. `Ok` = 0, all errors are negative.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaddStatus {
    /// The kernel ran.
    Ok = 0,
    /// The kernel rejected its buffers.
    KernelFailed = -1,
    /// An iteration count is invalid.
    ConfigError = -2,
    /// The global benchmark lock was poisoned by an earlier panic.
    InternalError = -20,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&BenchError> for VaddStatus {
    fn from(e: &BenchError) -> Self {
        match e {
            BenchError::Config(_) => VaddStatus::ConfigError,
            BenchError::Kernel(_) => VaddStatus::KernelFailed,
        }
    }
}
