//! Benchmark lifecycle: initialise, warm, run, verify.
//!
//! [`Benchmark`] owns one workload and the kernel that processes it. The
//! harness calls [`initialise`](Benchmark::initialise), then
//! [`warm_caches`](Benchmark::warm_caches), then [`run`](Benchmark::run)
//! any number of times, then [`verify`](Benchmark::verify). Nothing
//! enforces that order; calls out of order behave exactly as the
//! buffers dictate.

use crate::config::BenchConfig;
use crate::error::{BenchError, ConfigError};
use crate::kernel::{expected_word, DefaultKernel, Kernel};
use crate::workload::{Word, Workload, LEN};

/// Outcome of comparing the output buffer with the closed-form result.
///
/// Both sums wrap at 32 bits, the same way the lanes do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verification {
    /// Sum of `input[i] * (body_iterations + 1)` over all lanes.
    pub expected: Word,
    /// Sum of the output buffer.
    pub observed: Word,
}

impl Verification {
    /// Whether the sums agree.
    pub fn passed(&self) -> bool {
        self.expected == self.observed
    }

    /// Harness form: 1 on pass, 0 on fail.
    pub fn as_status(&self) -> i32 {
        i32::from(self.passed())
    }
}

/// One benchmark instance: config, kernel and buffers.
#[derive(Clone, Debug)]
pub struct Benchmark<K = DefaultKernel, const N: usize = LEN> {
    config: BenchConfig,
    kernel: K,
    workload: Workload<N>,
}

impl<K: Kernel, const N: usize> Benchmark<K, N> {
    /// Create a benchmark with [`BenchConfig::DEFAULT`] and zeroed buffers.
    pub const fn new(kernel: K) -> Self {
        Self {
            config: BenchConfig::DEFAULT,
            kernel,
            workload: Workload::new(),
        }
    }

    /// Create a benchmark with custom iteration counts.
    pub fn with_config(kernel: K, config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            kernel,
            workload: Workload::new(),
        })
    }

    /// Fill the input with `0..N`. Idempotent.
    pub fn initialise(&mut self) {
        self.workload.fill_ramp();
        tracing::debug!(len = N, kernel = self.kernel.name(), "workload initialised");
    }

    /// Run the kernel once with the warm-up count. `heat` is ignored.
    pub fn warm_caches(&mut self, heat: i32) {
        let _ = heat;
        match self.try_warm() {
            Ok(()) => tracing::debug!(
                iterations = self.config.warm_iterations,
                kernel = self.kernel.name(),
                "caches warmed"
            ),
            Err(error) => tracing::warn!(%error, "warm-up run failed"),
        }
    }

    /// Run the kernel once with the production count.
    ///
    /// Returns 0 on success, otherwise [`BenchError::status_code`].
    /// Harnesses ignore the value.
    pub fn run(&mut self) -> i32 {
        match self.try_run() {
            Ok(()) => 0,
            Err(error) => {
                tracing::warn!(%error, "benchmark run failed");
                error.status_code()
            }
        }
    }

    /// Warm-up run with the error surfaced.
    pub fn try_warm(&mut self) -> Result<(), BenchError> {
        let iterations = self.config.warm()?;
        let (input, output) = self.workload.split_mut();
        self.kernel.run(input, output, iterations)?;
        Ok(())
    }

    /// Production run with the error surfaced.
    pub fn try_run(&mut self) -> Result<(), BenchError> {
        let iterations = self.config.body()?;
        let (input, output) = self.workload.split_mut();
        self.kernel.run(input, output, iterations)?;
        Ok(())
    }

    /// Compare the output with the closed form for the production count.
    pub fn verify(&self) -> Verification {
        let iterations = self.config.body_iterations;
        let expected = self
            .workload
            .input()
            .iter()
            .fold(0 as Word, |acc, &x| acc.wrapping_add(expected_word(x, iterations)));
        let observed = self
            .workload
            .output()
            .iter()
            .fold(0 as Word, |acc, &x| acc.wrapping_add(x));
        let v = Verification { expected, observed };
        if v.passed() {
            tracing::info!(expected, observed, "verification passed");
        } else {
            tracing::warn!(expected, observed, "verification failed");
        }
        v
    }

    /// Harness form of [`verify`](Self::verify). `r` is ignored.
    pub fn verify_status(&self, r: i32) -> i32 {
        let _ = r;
        self.verify().as_status()
    }

    /// The active iteration counts.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The kernel under test.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The buffers.
    pub fn workload(&self) -> &Workload<N> {
        &self.workload
    }
}

impl<K: Kernel + Default, const N: usize> Default for Benchmark<K, N> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IterationKind;
    use crate::kernel::ScalarKernel;
    use proptest::prelude::*;

    fn scalar() -> Benchmark<ScalarKernel> {
        Benchmark::new(ScalarKernel)
    }

    #[test]
    fn full_lifecycle_passes() {
        let mut b = scalar();
        b.initialise();
        b.warm_caches(0);
        assert_eq!(b.run(), 0);
        let v = b.verify();
        // sum(0..32) * 51
        assert_eq!(v.expected, 496 * 51);
        assert!(v.passed());
        assert_eq!(b.verify_status(0), 1);
    }

    #[test]
    fn warm_only_fails_verification() {
        let mut b = scalar();
        b.initialise();
        b.warm_caches(1);
        let v = b.verify();
        assert_eq!(v.observed, 496 * 5);
        assert!(!v.passed());
        assert_eq!(v.as_status(), 0);
    }

    #[test]
    fn uninitialised_verifies_trivially() {
        let b = scalar();
        let v = b.verify();
        assert_eq!(v, Verification { expected: 0, observed: 0 });
        assert!(v.passed());
    }

    #[test]
    fn initialise_then_verify_without_run_fails() {
        let mut b = scalar();
        b.initialise();
        assert_eq!(b.verify_status(7), 0);
    }

    #[test]
    fn repeated_runs_are_stable() {
        let mut b = scalar();
        b.initialise();
        for _ in 0..3 {
            b.run();
            assert!(b.verify().passed());
        }
    }

    #[test]
    fn heat_and_r_are_ignored() {
        let mut a = scalar();
        let mut c = scalar();
        for b in [&mut a, &mut c] {
            b.initialise();
        }
        a.warm_caches(0);
        c.warm_caches(i32::MAX);
        assert_eq!(a.workload(), c.workload());
        a.run();
        assert_eq!(a.verify_status(0), a.verify_status(-5));
    }

    #[test]
    fn with_config_rejects_zero() {
        let err = Benchmark::<ScalarKernel>::with_config(
            ScalarKernel,
            BenchConfig {
                body_iterations: 0,
                warm_iterations: 4,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroIterations {
                which: IterationKind::Body
            }
        );
    }

    #[test]
    fn custom_config_and_length() {
        let mut b: Benchmark<ScalarKernel, 100> = Benchmark::with_config(
            ScalarKernel,
            BenchConfig {
                body_iterations: 7,
                warm_iterations: 1,
            },
        )
        .unwrap();
        b.initialise();
        b.run();
        assert_eq!(b.workload().output()[99], 99 * 8);
        assert!(b.verify().passed());
    }

    struct RejectingKernel;

    impl Kernel for RejectingKernel {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        fn run(
            &self,
            input: &[Word],
            _output: &mut [Word],
            _iterations: std::num::NonZeroU32,
        ) -> Result<(), crate::error::KernelError> {
            Err(crate::error::KernelError::LengthMismatch {
                input: input.len(),
                output: 0,
            })
        }
    }

    #[test]
    fn run_reports_kernel_error_code() {
        let mut b: Benchmark<RejectingKernel> = Benchmark::new(RejectingKernel);
        b.initialise();
        let err = b.try_run().unwrap_err();
        assert_eq!(b.run(), err.status_code());
        assert_eq!(b.run(), -1);
    }

    #[test]
    fn default_kernel_lifecycle_passes() {
        let mut b: Benchmark = Benchmark::default();
        b.initialise();
        b.warm_caches(0);
        b.run();
        assert!(b.verify().passed());
    }

    proptest! {
        #[test]
        fn verification_passes_for_any_count(body in 1u32..200, warm in 1u32..20) {
            let mut b: Benchmark<ScalarKernel> = Benchmark::with_config(
                ScalarKernel,
                BenchConfig { body_iterations: body, warm_iterations: warm },
            ).unwrap();
            b.initialise();
            b.warm_caches(0);
            b.run();
            prop_assert!(b.verify().passed());
        }
    }
}
