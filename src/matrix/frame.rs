use fixedbitset::FixedBitSet;

use super::CompatibilityMatrix;

/// Frame-copy strategy: `advance` clones the whole current frame (bits and
/// per-row counts) onto a stack, `revert` pops it. `O(mn)` per `advance`,
/// `O(1)` per `revert`.
///
/// Grounded on `original_source/include/compatibility_matrix.h`, whose
/// fixed `(m+1) * m * n` buffer and `l` frame index are here replaced by a
/// growable `Vec` stack — the teacher's own `fixedbitset` crate backs each
/// frame's bits.
pub struct FrameMatrix {
    n: usize,
    frames: Vec<FixedBitSet>,
    counts: Vec<Vec<usize>>,
}

impl FrameMatrix {
    fn bits(&self) -> &FixedBitSet {
        self.frames.last().expect("at least one frame")
    }

    fn bits_mut(&mut self) -> &mut FixedBitSet {
        self.frames.last_mut().expect("at least one frame")
    }

    fn counts_mut(&mut self) -> &mut Vec<usize> {
        self.counts.last_mut().expect("at least one frame")
    }
}

impl CompatibilityMatrix for FrameMatrix {
    fn new(m: usize, n: usize, fill: impl Fn(usize, usize) -> bool) -> Self {
        let mut bits = FixedBitSet::with_capacity(m * n);
        let mut counts = vec![0usize; m];
        for i in 0..m {
            for j in 0..n {
                if fill(i, j) {
                    bits.insert(i * n + j);
                    counts[i] += 1;
                }
            }
        }
        FrameMatrix { n, frames: vec![bits], counts: vec![counts] }
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self.bits().contains(i * self.n + j)
    }

    fn set(&mut self, i: usize, j: usize) {
        let idx = i * self.n + j;
        if !self.bits().contains(idx) {
            self.bits_mut().insert(idx);
            self.counts_mut()[i] += 1;
        }
    }

    fn unset(&mut self, i: usize, j: usize) {
        let idx = i * self.n + j;
        if self.bits().contains(idx) {
            self.bits_mut().set(idx, false);
            self.counts_mut()[i] -= 1;
        }
    }

    fn advance(&mut self) {
        self.frames.push(self.bits().clone());
        self.counts.push(self.counts.last().expect("at least one frame").clone());
    }

    fn revert(&mut self) {
        self.frames.pop();
        self.counts.pop();
        assert!(!self.frames.is_empty(), "revert without a matching advance");
    }

    fn num_candidates(&self, i: usize) -> usize {
        self.counts.last().expect("at least one frame")[i]
    }
}
