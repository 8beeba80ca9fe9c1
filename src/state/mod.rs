//! The matching-state abstraction and the free functions shared across
//! concrete states (Design Note 3 of `spec.md`): rather than a C++ class
//! hierarchy (`*_mono`/`*_ind` subclasses), every state carries a runtime
//! [`Semantic`] tag and calls into these shared functions, branching on it
//! where mono/induced actually differ (Design Note 1).

mod dynamic;
mod ri;
mod ri2;
mod simple;
mod ullmann;

pub use dynamic::DynamicState;
pub use ri::RiState;
pub use ri2::Ri2State;
pub use simple::SimpleState;
pub use ullmann::UllmannState;

use crate::graph::Digraph;
use crate::matrix::CompatibilityMatrix;
use crate::predicates::EdgeEq;

/// Monomorphism admits extra target edges; induced additionally forbids
/// them where the pattern has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantic {
    Mono,
    Induced,
}

/// The driver-facing contract every concrete state implements. `explore`
/// (`crate::explore`) only ever talks to a state through these eight
/// methods.
pub trait MatchingState {
    /// Number of pattern vertices already committed.
    fn empty(&self) -> bool;
    /// Every pattern vertex is committed.
    fn full(&self) -> bool;
    /// Candidate target vertices for the next pattern vertex. Materialized
    /// into an owned buffer per Design Note 4: no candidate range may be
    /// held live across `push`/`pop`/`advance`/`revert`.
    fn candidates(&self) -> Vec<usize>;
    /// Opens a checkpoint the matching `revert` discards.
    fn advance(&mut self);
    /// Attempts to map the current pattern vertex to `y`; `false` means `y`
    /// is infeasible and the caller must still call `revert`.
    fn assign(&mut self, y: usize) -> bool;
    /// Commits the assignment made by the last successful `assign`.
    fn push(&mut self, y: usize);
    /// Undoes the matching `push`.
    fn pop(&mut self);
    /// Discards every change made since the matching `advance`.
    fn revert(&mut self);
    /// The target vertex pattern vertex `x` is currently mapped to, if any.
    fn mapped(&self, x: usize) -> Option<usize>;
}

/// Shared topology check used by `SimpleState` and `RiState`: every
/// already-mapped neighbour of `x` (in either direction) must correspond to
/// an edge of `h` between `y` and that neighbour's image, subject to
/// `edge_eq`. Under [`Semantic::Induced`], every already-mapped *non*-
/// neighbour of `x` must additionally stay a non-neighbour of `y` in `h`.
///
/// Grounded on `original_source/include/simple_state.h`'s
/// `topology_condition`.
pub fn topology_condition(
    g: &impl Digraph,
    h: &impl Digraph,
    map: &[Option<usize>],
    semantic: Semantic,
    edge_eq: &impl EdgeEq,
    x: usize,
    y: usize,
) -> bool {
    for &i in g.adjacent_vertices(x) {
        if let Some(j) = map[i] {
            if !h.edge(y, j) || (edge_eq.enabled() && !edge_eq.eq(x, i, y, j)) {
                return false;
            }
        }
    }
    for &i in g.inv_adjacent_vertices(x) {
        if let Some(j) = map[i] {
            if !h.edge(j, y) || (edge_eq.enabled() && !edge_eq.eq(i, x, j, y)) {
                return false;
            }
        }
    }
    if semantic == Semantic::Induced {
        for i in 0..g.num_vertices() {
            if i == x {
                continue;
            }
            let Some(j) = map[i] else { continue };
            if !g.edge(x, i) && !g.edge(i, x) && (h.edge(y, j) || h.edge(j, y)) {
                return false;
            }
        }
    }
    true
}

/// Finds the pattern-vertex parent used for candidate generation by
/// `RiState`/`Ri2State`/`DynamicState`: the first already-*processed*
/// neighbour of `x` (out-neighbours scanned before in-neighbours),
/// returning `(parent, out)` where `out == false` means candidates for `x`
/// come from `h`'s in-neighbours of `map[parent]`, and `out == true` means
/// they come from `h`'s out-neighbours.
///
/// `processed(u)` abstracts over the two ways "already processed" is
/// decided: a fixed total order known up front (`Ri2State`), or "currently
/// mapped" when the order is chosen dynamically (`DynamicState`).
///
/// Grounded on `original_source/include/ri2_state.h`'s `g_parents`
/// construction and `dynamic_mat_state.h`'s `prepare()`.
pub fn parent_of(g: &impl Digraph, processed: impl Fn(usize) -> bool, x: usize) -> Option<(usize, bool)> {
    for &u in g.adjacent_vertices(x) {
        if processed(u) {
            return Some((u, false));
        }
    }
    for &u in g.inv_adjacent_vertices(x) {
        if processed(u) {
            return Some((u, true));
        }
    }
    None
}

/// Ullmann refinement condition for a single cell `(i, j)`: under
/// [`Semantic::Mono`], every `g`-neighbour of `i` must have some compatible
/// `h`-neighbour of `j`; under [`Semantic::Induced`], every *other* pattern
/// vertex `ii` must have some compatible `jj` whose adjacency to `j`
/// matches `ii`'s adjacency to `i`, in both directions (edges must map to
/// edges *and* non-edges to non-edges).
///
/// Grounded on `original_source/include/ullmann_state.h`'s
/// `ullmann_condition` (both `_mono` and `_ind` variants).
pub fn ullmann_condition(
    g: &impl Digraph,
    h: &impl Digraph,
    matrix: &impl CompatibilityMatrix,
    semantic: Semantic,
    i: usize,
    j: usize,
) -> bool {
    let m = g.num_vertices();
    let n = h.num_vertices();
    match semantic {
        Semantic::Mono => {
            for ii in 0..m {
                if g.edge(i, ii) && !(0..n).any(|jj| h.edge(j, jj) && matrix.get(ii, jj)) {
                    return false;
                }
                if g.edge(ii, i) && !(0..n).any(|jj| h.edge(jj, j) && matrix.get(ii, jj)) {
                    return false;
                }
            }
            true
        }
        Semantic::Induced => {
            for ii in 0..m {
                let out_g = g.edge(i, ii);
                let in_g = g.edge(ii, i);
                let mut exists_out = false;
                let mut exists_in = false;
                for jj in 0..n {
                    if matrix.get(ii, jj) {
                        if out_g == h.edge(j, jj) {
                            exists_out = true;
                        }
                        if in_g == h.edge(jj, j) {
                            exists_in = true;
                        }
                        if exists_out && exists_in {
                            break;
                        }
                    }
                }
                if !(exists_out && exists_in) {
                    return false;
                }
            }
            true
        }
    }
}

/// Fixed-point Ullmann refinement over the whole matrix: repeatedly clears
/// cells that fail [`ullmann_condition`] until no more change, or a row
/// becomes entirely empty (infeasible).
pub fn ullmann_refine(
    g: &impl Digraph,
    h: &impl Digraph,
    matrix: &mut impl CompatibilityMatrix,
    semantic: Semantic,
) -> bool {
    let m = g.num_vertices();
    let n = h.num_vertices();
    loop {
        let mut changed = false;
        for i in 0..m {
            for j in 0..n {
                if matrix.get(i, j) && !ullmann_condition(g, h, matrix, semantic, i, j) {
                    matrix.unset(i, j);
                    if !matrix.possible(i) {
                        return false;
                    }
                    changed = true;
                }
            }
        }
        if !changed {
            return true;
        }
    }
}

/// Second-order Ullmann-style propagation restricted to the unmatched
/// neighbourhood of a just-committed pair `(x, y)` — the "partial"
/// refinement pass `DynamicState` runs after every `push`, cheaper than a
/// full [`ullmann_refine`] sweep.
///
/// Grounded on `original_source/include/dynamic_mat_state.h`'s
/// `partial_ullmann_condition`/`partial_refine`.
pub fn ullmann_refine_partial(
    g: &impl Digraph,
    h: &impl Digraph,
    matrix: &mut impl CompatibilityMatrix,
    map: &[Option<usize>],
    inv: &[Option<usize>],
    x: usize,
    y: usize,
) {
    let condition = |matrix: &dyn CompatibilityMatrix, i: usize, j: usize| -> bool {
        for &ii in g.adjacent_vertices(i) {
            if map[ii].is_none()
                && !h.adjacent_vertices(j).iter().any(|&jj| matrix.get(ii, jj) && inv[jj].is_none())
            {
                return false;
            }
        }
        for &ii in g.inv_adjacent_vertices(i) {
            if map[ii].is_none()
                && !h.inv_adjacent_vertices(j).iter().any(|&jj| matrix.get(ii, jj) && inv[jj].is_none())
            {
                return false;
            }
        }
        true
    };

    for &i in g.adjacent_vertices(x) {
        if map[i].is_none() {
            for &j in h.adjacent_vertices(y) {
                if matrix.get(i, j) && inv[j].is_none() && !condition(matrix, i, j) {
                    matrix.unset(i, j);
                }
            }
        }
    }
    for &i in g.inv_adjacent_vertices(x) {
        if map[i].is_none() {
            for &j in h.inv_adjacent_vertices(y) {
                if matrix.get(i, j) && inv[j].is_none() && !condition(matrix, i, j) {
                    matrix.unset(i, j);
                }
            }
        }
    }
}

/// Push-time neighborhood filter: removes target vertices from the
/// candidate rows of `x`'s unmatched neighbours that can no longer be
/// consistent with the just-committed `(x, y)`. `g_not` is `None` under
/// [`Semantic::Mono`] (non-edges impose no constraint); under
/// [`Semantic::Induced`] it additionally forbids unmatched non-neighbours
/// of `x` from mapping to matched neighbours of `y`.
///
/// Grounded on `original_source/include/dynamic_mat_state.h`'s
/// `neighborhood_filter_after`.
#[allow(clippy::too_many_arguments)]
pub fn neighborhood_filter(
    g: &impl Digraph,
    h: &impl Digraph,
    h_not: &crate::graph::Complement,
    g_not: Option<&crate::graph::Complement>,
    map: &[Option<usize>],
    inv: &[Option<usize>],
    matrix: &mut impl CompatibilityMatrix,
    x: usize,
    y: usize,
) {
    for &i in g.adjacent_vertices(x) {
        if map[i].is_none() {
            for &j in h_not.not_adjacent_vertices(y) {
                if inv[j].is_none() {
                    matrix.unset(i, j);
                }
            }
        }
    }
    for &i in g.inv_adjacent_vertices(x) {
        if map[i].is_none() {
            for &j in h_not.not_inv_adjacent_vertices(y) {
                if inv[j].is_none() {
                    matrix.unset(i, j);
                }
            }
        }
    }
    if let Some(g_not) = g_not {
        for &j in h.adjacent_vertices(y) {
            if inv[j].is_none() {
                for &i in g_not.not_adjacent_vertices(x) {
                    if map[i].is_none() {
                        matrix.unset(i, j);
                    }
                }
            }
        }
        for &j in h.inv_adjacent_vertices(y) {
            if inv[j].is_none() {
                for &i in g_not.not_inv_adjacent_vertices(x) {
                    if map[i].is_none() {
                        matrix.unset(i, j);
                    }
                }
            }
        }
    }
}
