use fixedbitset::FixedBitSet;

use super::CompatibilityMatrix;

/// Log-replay strategy: only cleared cells are ever undone. `unset` pushes
/// the flat index onto an undo log; `advance` records the log length;
/// `revert` re-sets every cell cleared since, restoring per-row counts.
/// `set` is not logged (by contract it is only used while seeding the
/// matrix, before any `advance`).
///
/// Grounded on
/// `original_source/include/reduced_compatibility_matrix2_with_count.h`.
pub struct LogMatrix {
    n: usize,
    bits: FixedBitSet,
    counts: Vec<usize>,
    history: Vec<usize>,
    shots: Vec<usize>,
}

impl CompatibilityMatrix for LogMatrix {
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
        LogMatrix { n, bits, counts, history: Vec::new(), shots: Vec::new() }
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self.bits.contains(i * self.n + j)
    }

    fn set(&mut self, i: usize, j: usize) {
        let idx = i * self.n + j;
        if !self.bits.contains(idx) {
            self.bits.insert(idx);
            self.counts[i] += 1;
        }
    }

    fn unset(&mut self, i: usize, j: usize) {
        let idx = i * self.n + j;
        if self.bits.contains(idx) {
            self.bits.set(idx, false);
            self.counts[i] -= 1;
            self.history.push(idx);
        }
    }

    fn advance(&mut self) {
        self.shots.push(self.history.len());
    }

    fn revert(&mut self) {
        let stop = self.shots.pop().expect("revert without a matching advance");
        while self.history.len() > stop {
            let idx = self.history.pop().expect("history length checked above");
            self.bits.insert(idx);
            self.counts[idx / self.n] += 1;
        }
    }

    fn num_candidates(&self, i: usize) -> usize {
        self.counts[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revert_undoes_every_unset_since_advance() {
        let mut m = LogMatrix::new(2, 2, |_, _| true);
        m.advance();
        m.unset(0, 0);
        m.unset(0, 1);
        assert_eq!(m.num_candidates(0), 0);
        m.revert();
        assert!(m.get(0, 0));
        assert!(m.get(0, 1));
        assert_eq!(m.num_candidates(0), 2);
    }

    #[test]
    fn nested_advance_revert_round_trips() {
        let mut m = LogMatrix::new(1, 3, |_, _| true);
        m.advance();
        m.unset(0, 0);
        m.advance();
        m.unset(0, 1);
        assert_eq!(m.num_candidates(0), 1);
        m.revert();
        assert_eq!(m.num_candidates(0), 2);
        m.revert();
        assert_eq!(m.num_candidates(0), 3);
    }

    #[test]
    fn set_is_idempotent_and_not_logged() {
        let mut m = LogMatrix::new(1, 1, |_, _| false);
        m.advance();
        m.set(0, 0);
        m.set(0, 0);
        assert_eq!(m.num_candidates(0), 1);
        m.revert();
        // set() is unconditionally kept; revert only undoes unset().
        assert!(m.get(0, 0));
    }
}
