//! Inline-assembly kernel for RISC-V cores with the vector extension.

use std::arch::asm;
use std::num::NonZeroU32;

use super::{check_lengths, Kernel};
use crate::error::KernelError;
use crate::workload::Word;

/// Vector-add loop issued as `vadd.vv` with interleaved scalar filler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RvvKernel;

impl RvvKernel {
    /// Create the kernel. Usable in `const` context.
    pub const fn new() -> Self {
        Self
    }
}

impl Kernel for RvvKernel {
    fn name(&self) -> &'static str {
        "rvv"
    }

    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError> {
        check_lengths(input, output)?;
        if input.is_empty() {
            return Ok(());
        }
        // SAFETY: both pointers cover `input.len()` words, the length is
        // non-zero, and the borrows guarantee the buffers do not overlap.
        unsafe { vadd_body(input.as_ptr(), output.as_mut_ptr(), input.len(), iterations) };
        Ok(())
    }
}

/// Strip-mined accumulation loop.
///
/// Each pass of the outer loop takes `vl = min(remaining, VLMAX)` lanes,
/// copies them into `v2`, adds `v1` onto it `iterations` times and stores
/// the chunk. `vl` is then scaled to bytes (4 per `e32` lane) to advance
/// both pointers.
///
/// # Safety
///
/// `src` and `dst` must each be valid for `len` words, must not overlap,
/// and `len` must be non-zero.
#[inline(never)]
unsafe fn vadd_body(src: *const Word, dst: *mut Word, len: usize, iterations: NonZeroU32) {
    asm!(
        "2:",
        "vsetvli {vl}, {remaining}, e32, m1, ta, ma",
        "vle32.v v1, ({src})",
        "vadd.vi v2, v1, 0",
        "mv {counter}, {iterations}",
        "3:",
        "vadd.vv v2, v2, v1",
        "addi {counter}, {counter}, -1",
        "li {buf1}, 2",
        "li {buf2}, 4",
        "add {buf1}, {buf2}, {buf1}",
        "add {buf1}, {buf2}, {buf1}",
        "addi {buf1}, {buf1}, -1",
        "bnez {counter}, 3b",
        "vse32.v v2, ({dst})",
        "sub {remaining}, {remaining}, {vl}",
        "slli {vl}, {vl}, 2",
        "add {src}, {src}, {vl}",
        "add {dst}, {dst}, {vl}",
        "bnez {remaining}, 2b",
        remaining = inout(reg) len => _,
        src = inout(reg) src => _,
        dst = inout(reg) dst => _,
        iterations = in(reg) iterations.get() as usize,
        counter = out(reg) _,
        vl = out(reg) _,
        buf1 = out(reg) _,
        buf2 = out(reg) _,
        out("v1") _,
        out("v2") _,
        options(nostack),
    );
}
