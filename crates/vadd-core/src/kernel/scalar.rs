//! Portable reference kernel.

use std::hint::black_box;
use std::num::NonZeroU32;

use super::{check_lengths, Kernel};
use crate::error::KernelError;
use crate::workload::Word;

/// Plain-Rust kernel with the same lane semantics as the vector loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarKernel;

impl ScalarKernel {
    /// Create the kernel. Usable in `const` context.
    pub const fn new() -> Self {
        Self
    }
}

impl Kernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError> {
        check_lengths(input, output)?;
        output.copy_from_slice(input);
        for _ in 0..iterations.get() {
            for (acc, &x) in output.iter_mut().zip(input) {
                *acc = acc.wrapping_add(x);
            }
            scalar_filler();
        }
        Ok(())
    }
}

/// The scalar instructions the vector loop interleaves with each add.
/// Results are discarded but kept alive so the optimiser cannot drop them.
#[inline(always)]
fn scalar_filler() {
    let buf2 = black_box(4u32);
    let mut buf1 = black_box(2u32);
    buf1 = buf2.wrapping_add(buf1);
    buf1 = buf2.wrapping_add(buf1);
    black_box(buf1.wrapping_sub(1));
}
