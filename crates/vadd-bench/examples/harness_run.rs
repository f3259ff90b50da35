//! Local stand-in for the benchmark harness.
//!
//! Calls the four exported hooks in harness order, times `benchmark()`
//! between the points where `support.h` would place its start and stop
//! triggers, and exits non-zero if verification fails.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p vadd-bench --example harness_run -- 10
//! ```
//!
//! The optional argument is the number of timed repeats (default 1).

use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use vadd_ffi::{benchmark, initialise_benchmark, verify_benchmark, warm_caches};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let repeats: u32 = match std::env::args().nth(1).map(|s| s.parse()) {
        None => 1,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            eprintln!("usage: harness_run [REPEATS>0]");
            return ExitCode::FAILURE;
        }
    };

    initialise_benchmark();
    warm_caches(0);

    let start = Instant::now();
    let mut result = 0;
    for _ in 0..repeats {
        result = benchmark();
    }
    let elapsed = start.elapsed();

    let correct = verify_benchmark(result);
    tracing::info!(
        repeats,
        total_ns = elapsed.as_nanos() as u64,
        per_run_ns = (elapsed.as_nanos() / u128::from(repeats)) as u64,
        correct,
        "harness run complete"
    );
    println!(
        "vadd: {repeats} run(s) in {elapsed:?}, {}",
        if correct == 1 { "CORRECT" } else { "INCORRECT" }
    );

    if correct == 1 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
