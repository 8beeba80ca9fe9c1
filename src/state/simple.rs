use super::{topology_condition, MatchingState, Semantic};
use crate::graph::Digraph;
use crate::predicates::{EdgeEq, VertexEq};

/// `O(1)`-state matching: no compatibility matrix at all, `advance`/`revert`
/// are no-ops, and feasibility is re-derived from scratch on every
/// `assign` by scanning the already-mapped neighbours of the current
/// pattern vertex.
///
/// Under [`Semantic::Induced`], also maintains `g_out_count`/`g_in_count`
/// (how many of a pattern vertex's neighbours precede it in the fixed
/// vertex order, computed once) against a dynamically maintained
/// `h_out_count`/`h_in_count` (how many of a target vertex's neighbours are
/// currently mapped, updated on every `push`/`pop`).
///
/// Grounded on `original_source/include/simple_state.h`'s
/// `simple_state_ind`.
pub struct SimpleState<'g, G, H, Vx, Ex> {
    g: &'g G,
    h: &'g H,
    vertex_eq: Vx,
    edge_eq: Ex,
    order: Vec<usize>,
    map: Vec<Option<usize>>,
    inv: Vec<Option<usize>>,
    pos: usize,
    semantic: Semantic,
    g_out_count: Vec<usize>,
    g_in_count: Vec<usize>,
    h_out_count: Vec<usize>,
    h_in_count: Vec<usize>,
}

impl<'g, G, H, Vx, Ex> SimpleState<'g, G, H, Vx, Ex>
where
    G: Digraph,
    H: Digraph,
    Vx: VertexEq,
    Ex: EdgeEq,
{
    pub fn new(g: &'g G, h: &'g H, vertex_eq: Vx, edge_eq: Ex, order: Vec<usize>, semantic: Semantic) -> Self {
        let m = g.num_vertices();
        let n = h.num_vertices();
        assert_eq!(order.len(), m, "vertex order must cover every pattern vertex exactly once");
        let mut index_pos = vec![0usize; m];
        for (k, &x) in order.iter().enumerate() {
            index_pos[x] = k;
        }
        let g_out_count: Vec<usize> = (0..m)
            .map(|i| g.adjacent_vertices(i).iter().filter(|&&w| index_pos[w] < index_pos[i]).count())
            .collect();
        let g_in_count: Vec<usize> = (0..m)
            .map(|i| g.inv_adjacent_vertices(i).iter().filter(|&&w| index_pos[w] < index_pos[i]).count())
            .collect();
        SimpleState {
            g,
            h,
            vertex_eq,
            edge_eq,
            order,
            map: vec![None; m],
            inv: vec![None; n],
            pos: 0,
            semantic,
            g_out_count,
            g_in_count,
            h_out_count: vec![0; n],
            h_in_count: vec![0; n],
        }
    }
}

impl<'g, G, H, Vx, Ex> MatchingState for SimpleState<'g, G, H, Vx, Ex>
where
    G: Digraph,
    H: Digraph,
    Vx: VertexEq,
    Ex: EdgeEq,
{
    fn empty(&self) -> bool {
        self.pos == 0
    }

    fn full(&self) -> bool {
        self.pos == self.order.len()
    }

    fn candidates(&self) -> Vec<usize> {
        (0..self.h.num_vertices()).filter(|&y| self.inv[y].is_none()).collect()
    }

    fn advance(&mut self) {}

    fn assign(&mut self, y: usize) -> bool {
        let x = self.order[self.pos];
        (!self.vertex_eq.enabled() || self.vertex_eq.eq(x, y))
            && self.g.out_degree(x) <= self.h.out_degree(y)
            && self.g.in_degree(x) <= self.h.in_degree(y)
            && topology_condition(self.g, self.h, &self.map, self.semantic, &self.edge_eq, x, y)
            && (self.semantic != Semantic::Induced
                || (self.g_out_count[x] == self.h_out_count[y] && self.g_in_count[x] == self.h_in_count[y]))
    }

    fn push(&mut self, y: usize) {
        let x = self.order[self.pos];
        self.map[x] = Some(y);
        self.inv[y] = Some(x);
        self.pos += 1;
        for &p in self.h.inv_adjacent_vertices(y) {
            self.h_out_count[p] += 1;
        }
        for &s in self.h.adjacent_vertices(y) {
            self.h_in_count[s] += 1;
        }
    }

    fn pop(&mut self) {
        self.pos -= 1;
        let x = self.order[self.pos];
        if let Some(y) = self.map[x].take() {
            self.inv[y] = None;
            for &p in self.h.inv_adjacent_vertices(y) {
                self.h_out_count[p] -= 1;
            }
            for &s in self.h.adjacent_vertices(y) {
                self.h_in_count[s] -= 1;
            }
        }
    }

    fn revert(&mut self) {}

    fn mapped(&self, x: usize) -> Option<usize> {
        self.map[x]
    }
}
