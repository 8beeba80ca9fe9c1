use fixedbitset::FixedBitSet;

use super::Digraph;

/// Dense `O(1)` edge test layered over any `Digraph`, used by states
/// (`UllmannState`, `DynamicState`) whose inner loops re-test arbitrary
/// `(u, v)` pairs often enough that list lookups would dominate.
///
/// Grounded on `original_source/include/adjacency_matrix.h`: out/in degree
/// and neighbour iteration still delegate to the wrapped representation,
/// only `edge` is backed by the bitset.
pub struct AdjacencyMatrixView<'g, G> {
    g: &'g G,
    bits: FixedBitSet,
    n: usize,
}

impl<'g, G: Digraph> AdjacencyMatrixView<'g, G> {
    pub fn new(g: &'g G) -> Self {
        let n = g.num_vertices();
        let mut bits = FixedBitSet::with_capacity(n * n);
        for u in 0..n {
            for &v in g.adjacent_vertices(u) {
                bits.insert(u * n + v);
            }
        }
        AdjacencyMatrixView { g, bits, n }
    }
}

impl<'g, G: Digraph> Digraph for AdjacencyMatrixView<'g, G> {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn edge(&self, u: usize, v: usize) -> bool {
        self.bits.contains(u * self.n + v)
    }

    fn adjacent_vertices(&self, u: usize) -> &[usize] {
        self.g.adjacent_vertices(u)
    }

    fn inv_adjacent_vertices(&self, u: usize) -> &[usize] {
        self.g.inv_adjacent_vertices(u)
    }

    fn out_degree(&self, u: usize) -> usize {
        self.g.out_degree(u)
    }

    fn in_degree(&self, u: usize) -> usize {
        self.g.in_degree(u)
    }
}
