use super::Digraph;

/// Non-out/non-in neighbour sets, used by induced-mode topology checks and
/// by monomorphism/induced neighborhood-filter propagation.
///
/// Grounded on `original_source/include/ordered_adjacency_list_with_not_after.h`
/// (`not_out`/`not_in` construction). Self-loops are pinned as edges and are
/// excluded from both complement sets regardless of `edge(u, u)` — unlike
/// `orderable_adjacency_listmat.h`, which excludes self from *every* list
/// including the positive adjacency ones, a choice this crate's base `Graph`
/// does not reproduce (see DESIGN.md Open Question (b)).
pub struct Complement {
    not_out: Vec<Vec<usize>>,
    not_in: Vec<Vec<usize>>,
}

impl Complement {
    pub fn new<G: Digraph>(g: &G) -> Self {
        let n = g.num_vertices();
        let mut not_out = vec![Vec::new(); n];
        let mut not_in = vec![Vec::new(); n];
        for u in 0..n {
            for v in 0..n {
                if u == v {
                    continue;
                }
                if !g.edge(u, v) {
                    not_out[u].push(v);
                }
                if !g.edge(v, u) {
                    not_in[u].push(v);
                }
            }
        }
        Complement { not_out, not_in }
    }

    pub fn not_adjacent_vertices(&self, u: usize) -> &[usize] {
        &self.not_out[u]
    }

    pub fn not_inv_adjacent_vertices(&self, u: usize) -> &[usize] {
        &self.not_in[u]
    }
}
