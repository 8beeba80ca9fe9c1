use super::{ullmann_refine, MatchingState, Semantic};
use crate::graph::Digraph;
use crate::matrix::CompatibilityMatrix;
use crate::predicates::VertexEq;

/// Row-scan-and-refine matching state: `M` is filtered to a fixed point by
/// Ullmann's algorithm both at construction and after every commit, and
/// `candidates()` is simply the live cells of the current pattern vertex's
/// row. Does not consult an edge-equivalence predicate — the source this is
/// grounded on only ever threads a vertex predicate through the initial
/// fill.
///
/// Grounded on `original_source/include/ullmann_state.h`.
pub struct UllmannState<'g, G, H, M, Vx> {
    g: &'g G,
    h: &'g H,
    vertex_eq: Vx,
    matrix: M,
    order: Vec<usize>,
    map: Vec<Option<usize>>,
    inv: Vec<Option<usize>>,
    pos: usize,
    semantic: Semantic,
}

impl<'g, G, H, M, Vx> UllmannState<'g, G, H, M, Vx>
where
    G: Digraph,
    H: Digraph,
    M: CompatibilityMatrix,
    Vx: VertexEq,
{
    pub fn new(g: &'g G, h: &'g H, vertex_eq: Vx, order: Vec<usize>, semantic: Semantic) -> Self {
        let m = g.num_vertices();
        let n = h.num_vertices();
        assert_eq!(order.len(), m, "vertex order must cover every pattern vertex exactly once");
        let mut matrix = M::new(m, n, |i, j| {
            (!vertex_eq.enabled() || vertex_eq.eq(i, j))
                && g.out_degree(i) <= h.out_degree(j)
                && g.in_degree(i) <= h.in_degree(j)
        });
        ullmann_refine(g, h, &mut matrix, semantic);
        UllmannState {
            g,
            h,
            vertex_eq,
            matrix,
            order,
            map: vec![None; m],
            inv: vec![None; n],
            pos: 0,
            semantic,
        }
    }

    fn filter(&mut self, i: usize, j: usize) {
        let m = self.g.num_vertices();
        let n = self.h.num_vertices();
        for ii in 0..m {
            self.matrix.unset(ii, j);
        }
        for jj in 0..n {
            self.matrix.unset(i, jj);
        }
        self.matrix.set(i, j);
    }
}

impl<'g, G, H, M, Vx> MatchingState for UllmannState<'g, G, H, M, Vx>
where
    G: Digraph,
    H: Digraph,
    M: CompatibilityMatrix,
    Vx: VertexEq,
{
    fn empty(&self) -> bool {
        self.pos == 0
    }

    fn full(&self) -> bool {
        self.pos == self.order.len()
    }

    fn candidates(&self) -> Vec<usize> {
        let x = self.order[self.pos];
        let n = self.h.num_vertices();
        (0..n).filter(|&j| self.matrix.get(x, j)).collect()
    }

    fn advance(&mut self) {
        self.matrix.advance();
    }

    fn assign(&mut self, y: usize) -> bool {
        let x = self.order[self.pos];
        self.filter(x, y);
        ullmann_refine(self.g, self.h, &mut self.matrix, self.semantic)
    }

    fn push(&mut self, y: usize) {
        let x = self.order[self.pos];
        self.map[x] = Some(y);
        self.inv[y] = Some(x);
        self.pos += 1;
    }

    fn pop(&mut self) {
        self.pos -= 1;
        let x = self.order[self.pos];
        if let Some(y) = self.map[x].take() {
            self.inv[y] = None;
        }
    }

    fn revert(&mut self) {
        self.matrix.revert();
    }

    fn mapped(&self, x: usize) -> Option<usize> {
        self.map[x]
    }
}
