use super::{parent_of, MatchingState, Semantic};
use crate::graph::Digraph;
use crate::predicates::{EdgeEq, VertexEq};

/// Before/after-partitioned matching state: at construction, each pattern
/// vertex's neighbour lists are split, relative to the fixed vertex order,
/// into a "before" half (neighbours that will already be mapped) stored
/// densely, so the topology check during search scans exactly the
/// already-mapped neighbours with no per-entry `Option` check.
///
/// Grounded on `original_source/include/ri2_state.h`: `g_parents`
/// (candidate-generation parent), `adjacent_vertices_before`/
/// `inv_adjacent_vertices_before` (the partitioned scan), and the induced
/// count check using `out_degree_before`/`in_degree_before` against a
/// dynamically maintained `h_out_count`/`h_in_count`.
pub struct Ri2State<'g, G, H, Vx, Ex> {
    g: &'g G,
    h: &'g H,
    vertex_eq: Vx,
    edge_eq: Ex,
    order: Vec<usize>,
    parent: Vec<Option<(usize, bool)>>,
    adj_before: Vec<Vec<usize>>,
    inv_adj_before: Vec<Vec<usize>>,
    map: Vec<Option<usize>>,
    inv: Vec<Option<usize>>,
    pos: usize,
    semantic: Semantic,
    g_out_count: Vec<usize>,
    g_in_count: Vec<usize>,
    h_out_count: Vec<usize>,
    h_in_count: Vec<usize>,
}

impl<'g, G, H, Vx, Ex> Ri2State<'g, G, H, Vx, Ex>
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
        let adj_before: Vec<Vec<usize>> = (0..m)
            .map(|i| {
                g.adjacent_vertices(i).iter().copied().filter(|&w| index_pos[w] < index_pos[i]).collect()
            })
            .collect();
        let inv_adj_before: Vec<Vec<usize>> = (0..m)
            .map(|i| {
                g.inv_adjacent_vertices(i).iter().copied().filter(|&w| index_pos[w] < index_pos[i]).collect()
            })
            .collect();
        let g_out_count: Vec<usize> = adj_before.iter().map(Vec::len).collect();
        let g_in_count: Vec<usize> = inv_adj_before.iter().map(Vec::len).collect();
        Ri2State {
            g,
            h,
            vertex_eq,
            edge_eq,
            order,
            parent,
            adj_before,
            inv_adj_before,
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

    fn topology_condition_before(&self, x: usize, y: usize) -> bool {
        for &i in &self.adj_before[x] {
            let j = self.map[i].expect("before-partitioned neighbour is always already mapped");
            if !self.h.edge(y, j) || (self.edge_eq.enabled() && !self.edge_eq.eq(x, i, y, j)) {
                return false;
            }
        }
        for &i in &self.inv_adj_before[x] {
            let j = self.map[i].expect("before-partitioned neighbour is always already mapped");
            if !self.h.edge(j, y) || (self.edge_eq.enabled() && !self.edge_eq.eq(i, x, j, y)) {
                return false;
            }
        }
        if self.semantic == Semantic::Induced {
            for i in 0..self.g.num_vertices() {
                if i == x {
                    continue;
                }
                let Some(j) = self.map[i] else { continue };
                if !self.g.edge(x, i) && !self.g.edge(i, x) && (self.h.edge(y, j) || self.h.edge(j, y)) {
                    return false;
                }
            }
        }
        true
    }
}

impl<'g, G, H, Vx, Ex> MatchingState for Ri2State<'g, G, H, Vx, Ex>
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
            && self.topology_condition_before(x, y)
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
