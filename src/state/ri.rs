use super::{parent_of, topology_condition, MatchingState, Semantic};
use crate::graph::Digraph;
use crate::predicates::{EdgeEq, VertexEq};

/// Parent-candidate-generation matching state: candidates for the current
/// pattern vertex come from the `h`-neighbourhood of the already-mapped
/// image of a single precomputed "parent" vertex (the first neighbour of
/// `x` that precedes it in the fixed vertex order), rather than scanning
/// every target vertex. Feasibility is otherwise checked the same way as
/// [`super::SimpleState`] (full neighbour scan, same induced count
/// bookkeeping) — this is the "ri" taxonomy row, distinct from `ri2`'s
/// before/after-partitioned variant in how the topology check is scanned.
///
/// Grounded on `original_source/include/ri_dynamic_parent_state.h`, with
/// the parent fixed once at construction from a static vertex order
/// (cross-checked against `include/ri2_state.h`'s `g_parents` construction,
/// since `ri_state.h` itself was not present in the retrieved source set).
pub struct RiState<'g, G, H, Vx, Ex> {
    g: &'g G,
    h: &'g H,
    vertex_eq: Vx,
    edge_eq: Ex,
    order: Vec<usize>,
    parent: Vec<Option<(usize, bool)>>,
    map: Vec<Option<usize>>,
    inv: Vec<Option<usize>>,
    pos: usize,
    semantic: Semantic,
    g_out_count: Vec<usize>,
    g_in_count: Vec<usize>,
    h_out_count: Vec<usize>,
    h_in_count: Vec<usize>,
}

impl<'g, G, H, Vx, Ex> RiState<'g, G, H, Vx, Ex>
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
        let parent: Vec<Option<(usize, bool)>> = (0..m)
            .map(|x| parent_of(g, |u| index_pos[u] < index_pos[x], x))
            .collect();
        let g_out_count: Vec<usize> = (0..m)
            .map(|i| g.adjacent_vertices(i).iter().filter(|&&w| index_pos[w] < index_pos[i]).count())
            .collect();
        let g_in_count: Vec<usize> = (0..m)
            .map(|i| g.inv_adjacent_vertices(i).iter().filter(|&&w| index_pos[w] < index_pos[i]).count())
            .collect();
        RiState {
            g,
            h,
            vertex_eq,
            edge_eq,
            order,
            parent,
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

impl<'g, G, H, Vx, Ex> MatchingState for RiState<'g, G, H, Vx, Ex>
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
        let x = self.order[self.pos];
        match self.parent[x] {
            None => (0..self.h.num_vertices()).filter(|&y| self.inv[y].is_none()).collect(),
            Some((p, out)) => {
                let py = self.map[p].expect("parent vertex already mapped by construction");
                let list = if out { self.h.adjacent_vertices(py) } else { self.h.inv_adjacent_vertices(py) };
                list.iter().copied().filter(|&y| self.inv[y].is_none()).collect()
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::explore;
    use crate::graph::Graph;
    use crate::order::order_greatest_constraint_first;
    use crate::predicates::AlwaysTrue;

    #[test]
    fn four_cycle_has_eight_automorphisms_undirected_encoding() {
        let g = Graph::new(4, [(0, 1), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2), (3, 0), (0, 3)]);
        let order = order_greatest_constraint_first(&g);
        let mut state = RiState::new(&g, &g, AlwaysTrue, AlwaysTrue, order, Semantic::Induced);
        let mut count = 0;
        explore(&mut state, &mut |_| {
            count += 1;
            true
        });
        assert_eq!(count, 8);
    }

    #[test]
    fn directed_four_cycle_has_four_automorphisms() {
        let g = Graph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let order = order_greatest_constraint_first(&g);
        let mut state = RiState::new(&g, &g, AlwaysTrue, AlwaysTrue, order, Semantic::Induced);
        let mut count = 0;
        explore(&mut state, &mut |_| {
            count += 1;
            true
        });
        assert_eq!(count, 4);
    }
}
