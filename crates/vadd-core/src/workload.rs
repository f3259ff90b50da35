//! Fixed-size input and output buffers.
//!
//! The harness build uses [`LEN`] elements. Other lengths exist so tests
//! can exercise buffers that span several hardware vector chunks.

/// Number of elements processed per kernel invocation.
pub const LEN: usize = 32;

/// Element type of both buffers. Matches the kernel's `e32` element width.
pub type Word = u32;

/// Input and output buffers for one benchmark instance.
///
/// Both start zeroed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload<const N: usize = LEN> {
    input: [Word; N],
    output: [Word; N],
}

impl<const N: usize> Workload<N> {
    /// Create a zeroed workload.
    pub const fn new() -> Self {
        Self {
            input: [0; N],
            output: [0; N],
        }
    }

    /// Fill the input with `0, 1, ..., N-1`. Idempotent.
    pub fn fill_ramp(&mut self) {
        for (i, slot) in self.input.iter_mut().enumerate() {
            *slot = i as Word;
        }
    }

    /// The input buffer.
    pub fn input(&self) -> &[Word; N] {
        &self.input
    }

    /// The output buffer as last written by a kernel.
    pub fn output(&self) -> &[Word; N] {
        &self.output
    }

    /// Borrow input for reading and output for writing at the same time.
    pub fn split_mut(&mut self) -> (&[Word; N], &mut [Word; N]) {
        (&self.input, &mut self.output)
    }
}

impl<const N: usize> Default for Workload<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let w: Workload = Workload::new();
        assert!(w.input().iter().all(|&x| x == 0));
        assert!(w.output().iter().all(|&x| x == 0));
        assert_eq!(w.input().len(), LEN);
    }

    #[test]
    fn fill_ramp_writes_indices() {
        let mut w: Workload<8> = Workload::new();
        w.fill_ramp();
        assert_eq!(w.input(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn fill_ramp_idempotent() {
        let mut a: Workload = Workload::new();
        a.fill_ramp();
        let once = a.clone();
        a.fill_ramp();
        assert_eq!(a, once);
    }

    #[test]
    fn fill_ramp_leaves_output_alone() {
        let mut w: Workload<4> = Workload::new();
        w.split_mut().1[2] = 9;
        w.fill_ramp();
        assert_eq!(w.output(), &[0, 0, 9, 0]);
    }
}
