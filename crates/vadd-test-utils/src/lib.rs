//! Mock kernels for vadd development.
//!
//! [`RecordingKernel`] logs every invocation and delegates to
//! [`ScalarKernel`]. [`CorruptingKernel`] produces a wrong lane so
//! verification failure paths can be exercised off-target.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::num::NonZeroU32;

use vadd_core::{Kernel, KernelError, ScalarKernel, Word};

/// One recorded kernel invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelCall {
    pub len: usize,
    pub iterations: u32,
}

/// Kernel that records each call, then computes the real result.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    calls: RefCell<Vec<KernelCall>>,
}

impl RecordingKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<KernelCall> {
        self.calls.borrow().clone()
    }

    /// Iteration counts of all calls so far.
    pub fn iteration_history(&self) -> Vec<u32> {
        self.calls.borrow().iter().map(|c| c.iterations).collect()
    }
}

impl Kernel for RecordingKernel {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError> {
        self.calls.borrow_mut().push(KernelCall {
            len: input.len(),
            iterations: iterations.get(),
        });
        ScalarKernel.run(input, output, iterations)
    }
}

/// Kernel that computes the real result, then adds `delta` to one lane.
#[derive(Clone, Copy, Debug)]
pub struct CorruptingKernel {
    pub lane: usize,
    pub delta: Word,
}

impl CorruptingKernel {
    pub fn new(lane: usize, delta: Word) -> Self {
        Self { lane, delta }
    }
}

impl Kernel for CorruptingKernel {
    fn name(&self) -> &'static str {
        "corrupting"
    }

    fn run(
        &self,
        input: &[Word],
        output: &mut [Word],
        iterations: NonZeroU32,
    ) -> Result<(), KernelError> {
        ScalarKernel.run(input, output, iterations)?;
        if let Some(slot) = output.get_mut(self.lane) {
            *slot = slot.wrapping_add(self.delta);
        }
        Ok(())
    }
}
