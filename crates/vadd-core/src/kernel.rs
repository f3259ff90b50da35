//! The vector-add accumulation kernel.
//!
//! Every kernel computes the same thing: `output = input`, then `iterations`
//! rounds of `output += input` on wrapping 32-bit lanes, each round
//! interleaved with a short run of scalar filler arithmetic. The closed form
//! is `output[i] = input[i] * (iterations + 1)`, which [`expected_word`]
//! computes directly.
//!
//! [`RvvKernel`] issues the loop as inline assembly and is only compiled for
//! RISC-V targets with the `v` feature enabled. [`ScalarKernel`] is the
//! portable reference. [`DefaultKernel`] picks the best one for the target.

use std::num::NonZeroU32;

use crate::error::KernelError;
use crate::workload::Word;

mod scalar;

#[cfg(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_feature = "v"
))]
#[allow(unsafe_code)]
mod rvv;

pub use scalar::ScalarKernel;

#[cfg(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_feature = "v"
))]
pub use rvv::RvvKernel;

/// The kernel used by the harness hooks on this target.
#[cfg(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_feature = "v"
))]
pub type DefaultKernel = RvvKernel;

/// The kernel used by the harness hooks on this target.
#[cfg(not(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_feature = "v"
)))]
pub type DefaultKernel = ScalarKernel;

/// A vector-add accumulation kernel.
pub trait Kernel {
    /// Short identifier used in log events and benchmark names.
    fn name(&self) -> &'static str;

    /// Write `input * (iterations + 1)` into `output`, lane by lane.
    ///
    /// Both slices must have the same length. An empty pair is a no-op.
    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError>;
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError> {
        (**self).run(input, output, iterations)
    }
}

/// Reject buffers of unequal length.
pub fn check_lengths(input: &[Word], output: &[Word]) -> Result<(), KernelError> {
    if input.len() != output.len() {
        return Err(KernelError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    Ok(())
}

/// The value a kernel leaves in one lane: `x * (iterations + 1)`, wrapping.
pub fn expected_word(x: Word, iterations: u32) -> Word {
    x.wrapping_mul(iterations.wrapping_add(1))
}
