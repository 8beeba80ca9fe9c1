use super::{neighborhood_filter, ullmann_refine, ullmann_refine_partial, MatchingState, Semantic};
use crate::graph::{Complement, Digraph};
use crate::matrix::CompatibilityMatrix;
use crate::predicates::VertexEq;

/// Dynamic-reordering matching state: there is no fixed vertex order. At
/// every level the still-unassigned pattern vertex with the fewest live
/// candidates in `M` is picked next (`prepare`), and candidates are drawn
/// from the `h`-neighbourhood of whichever already-mapped neighbour was
/// found when that vertex was picked. Every commit narrows `M` with a
/// column-clear, a neighbourhood filter, and — while at least half the
/// pattern remains unassigned — a partial second-order Ullmann refinement.
///
/// Grounded on `original_source/include/dynamic_mat_state.h`'s
/// `dynamic_mat_state_ind`; the monomorphism flavour (no `_mono` variant
/// was present in the retrieved source) is derived by omitting the
/// non-edge-preservation half of `neighborhood_filter`, matching how
/// `ullmann_state_mono`/`_ind` differ from each other in this crate's
/// shared `ullmann_condition`.
pub struct DynamicState<'g, G, H, M, Vx> {
    g: &'g G,
    h: &'g H,
    g_not: Option<Complement>,
    h_not: Complement,
    vertex_eq: Vx,
    matrix: M,
    map: Vec<Option<usize>>,
    inv: Vec<Option<usize>>,
    avail: Vec<bool>,
    avail_count: usize,
    x_stack: Vec<usize>,
    h_parent: Vec<Option<(usize, bool)>>,
    semantic: Semantic,
}

impl<'g, G, H, M, Vx> DynamicState<'g, G, H, M, Vx>
where
    G: Digraph,
    H: Digraph,
    M: CompatibilityMatrix,
    Vx: VertexEq,
{
    pub fn new(g: &'g G, h: &'g H, vertex_eq: Vx, semantic: Semantic) -> Self {
        let m = g.num_vertices();
        let n = h.num_vertices();
        let mut matrix = M::new(m, n, |i, j| {
            (!vertex_eq.enabled() || vertex_eq.eq(i, j))
                && g.out_degree(i) <= h.out_degree(j)
                && g.in_degree(i) <= h.in_degree(j)
        });
        ullmann_refine(g, h, &mut matrix, semantic);
        let g_not = match semantic {
            Semantic::Induced => Some(Complement::new(g)),
            Semantic::Mono => None,
        };
        let h_not = Complement::new(h);
        let mut state = DynamicState {
            g,
            h,
            g_not,
            h_not,
            vertex_eq,
            matrix,
            map: vec![None; m],
            inv: vec![None; n],
            avail: vec![true; m],
            avail_count: m,
            x_stack: Vec::new(),
            h_parent: vec![None; m],
            semantic,
        };
        if m > 0 {
            state.prepare();
        }
        state
    }

    fn prepare(&mut self) {
        let m = self.map.len();
        let mut best: Option<usize> = None;
        for i in 0..m {
            if self.avail[i] {
                best = Some(match best {
                    None => i,
                    Some(b) => {
                        if self.matrix.num_candidates(i) < self.matrix.num_candidates(b) {
                            i
                        } else {
                            b
                        }
                    }
                });
            }
        }
        let x = best.expect("prepare called with at least one available pattern vertex");
        self.avail[x] = false;
        self.avail_count -= 1;
        self.x_stack.push(x);

        let mut parent = None;
        for &u in self.g.adjacent_vertices(x) {
            if let Some(j) = self.map[u] {
                parent = Some((j, false));
                break;
            }
        }
        if parent.is_none() {
            for &u in self.g.inv_adjacent_vertices(x) {
                if let Some(j) = self.map[u] {
                    parent = Some((j, true));
                    break;
                }
            }
        }
        self.h_parent[x] = parent;
    }

    fn forget(&mut self) {
        let x = self.x_stack.pop().expect("forget called without a matching prepare");
        self.avail[x] = true;
        self.avail_count += 1;
        self.h_parent[x] = None;
    }
}

impl<'g, G, H, M, Vx> MatchingState for DynamicState<'g, G, H, M, Vx>
where
    G: Digraph,
    H: Digraph,
    M: CompatibilityMatrix,
    Vx: VertexEq,
{
    fn empty(&self) -> bool {
        self.x_stack.is_empty()
    }

    fn full(&self) -> bool {
        self.avail_count == 0
    }

    fn candidates(&self) -> Vec<usize> {
        let x = *self.x_stack.last().expect("candidates() called before any prepare");
        match self.h_parent[x] {
            None => (0..self.h.num_vertices()).filter(|&y| self.inv[y].is_none()).collect(),
            Some((p, out)) => {
                let list = if out { self.h.adjacent_vertices(p) } else { self.h.inv_adjacent_vertices(p) };
                list.iter().copied().filter(|&y| self.inv[y].is_none()).collect()
            }
        }
    }

    fn advance(&mut self) {
        self.matrix.advance();
    }

    fn assign(&mut self, y: usize) -> bool {
        let x = *self.x_stack.last().expect("assign() called before any prepare");
        self.matrix.get(x, y)
    }

    fn push(&mut self, y: usize) {
        let x = *self.x_stack.last().expect("push() called before any prepare");
        self.map[x] = Some(y);
        self.inv[y] = Some(x);

        for i in 0..self.map.len() {
            if self.avail[i] {
                self.matrix.unset(i, y);
            }
        }
        neighborhood_filter(
            self.g,
            self.h,
            &self.h_not,
            self.g_not.as_ref(),
            &self.map,
            &self.inv,
            &mut self.matrix,
            x,
            y,
        );
        if self.avail_count >= self.map.len() / 2 {
            ullmann_refine_partial(self.g, self.h, &mut self.matrix, &self.map, &self.inv, x, y);
        }
        if !self.full() {
            self.prepare();
        }
    }

    fn pop(&mut self) {
        let was_full = self.full();
        if !was_full {
            self.forget();
        }
        let x = *self.x_stack.last().expect("pop() called before any prepare");
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
