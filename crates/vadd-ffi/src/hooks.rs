//! The four harness entry points.
//!
//! The global benchmark is built in `const` context so there is no
//! first-call initialisation. Each hook holds the lock for its whole call;
//! the harness is single-threaded, so the lock is never contended there.

use std::ffi::c_int;
use std::sync::Mutex;

use vadd_core::{Benchmark, DefaultKernel, LEN};

use crate::status::VaddStatus;

static BENCH: Mutex<Benchmark<DefaultKernel, LEN>> =
    Mutex::new(Benchmark::new(DefaultKernel::new()));

/// Fill the input buffer with `0..LEN`. Idempotent.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn initialise_benchmark() {
    ffi_guard!((), {
        ffi_lock!(BENCH, ()).initialise();
    })
}

/// Run the kernel once with the warm-up iteration count. `heat` is unused.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn warm_caches(heat: c_int) {
    ffi_guard!((), {
        ffi_lock!(BENCH, ()).warm_caches(heat);
    })
}

/// Run the kernel with the production iteration count.
///
/// Returns `VADD_STATUS_OK` (0) on success, a negative [`VaddStatus`]
/// otherwise. Harnesses ignore the value.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn benchmark() -> c_int {
    ffi_guard!(VaddStatus::Panicked as c_int, {
        ffi_lock!(BENCH, VaddStatus::InternalError as c_int).run()
    })
}

/// Compare the output with `input * (iterations + 1)`.
///
/// Returns 1 if the sums match, 0 otherwise (including when the lock is
/// poisoned or a panic was caught). `r` is unused.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn verify_benchmark(r: c_int) -> c_int {
    ffi_guard!(0, { ffi_lock!(BENCH, 0).verify_status(r) })
}
