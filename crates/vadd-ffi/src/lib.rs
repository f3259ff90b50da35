//! C-ABI harness hooks for the vadd micro-benchmark.
//!
//! Exports `initialise_benchmark`, `warm_caches`, `benchmark` and
//! `verify_benchmark` with the signatures an Embench-style `support.h`
//! expects. All four operate on one process-global
//! [`Benchmark`](vadd_core::Benchmark) using the target's
//! [`DefaultKernel`](vadd_core::DefaultKernel).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body`, returning `$fallback` if it panics.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// Lock `$mutex`, returning `$fallback` from the enclosing guard if poisoned.
macro_rules! ffi_lock {
    ($mutex:expr, $fallback:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::error!("benchmark lock poisoned");
                return $fallback;
            }
        }
    };
}

pub mod hooks;
pub mod status;

pub use hooks::{benchmark, initialise_benchmark, verify_benchmark, warm_caches};
pub use status::VaddStatus;
