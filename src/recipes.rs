//! Named entry points wiring {graph representation, vertex order, matching
//! state, compatibility-matrix strategy} into one call per
//! state/semantic pair, mirroring `original_source/include/predefined.h`'s
//! `ullmann_mono`/`ri_ind`/… naming and the teacher's own
//! `is_isomorphic`/`is_isomorphic_subgraph` public-function family.
//!
//! Every recipe hands the callback an owned snapshot of the current
//! mapping (`&[Option<usize>]`, indexed by pattern vertex) rather than a
//! reference into the state itself, so callers never need to name the
//! state's own (shifting, per-recipe) concrete type. Each recipe takes its
//! own `vertex_eq`/`edge_eq` predicates rather than hardcoding `AlwaysTrue`,
//! matching `predefined.h`'s `VertexEquivalencePredicate`/
//! `EdgeEquivalencePredicate` pass-through parameters. `UllmannState` and
//! `DynamicState` never thread an edge predicate (their `predefined.h`
//! counterparts don't either), so those two families take `vertex_eq` only.

use crate::explore::explore;
use crate::graph::{AdjacencyMatrixView, Graph};
use crate::matrix::LogMatrix;
use crate::order::{order_deg, order_greatest_constraint_first};
use crate::predicates::{AlwaysTrue, EdgeEq, VertexEq};
use crate::state::{DynamicState, RiState, Ri2State, Semantic, SimpleState, UllmannState};

type Callback<'a> = dyn FnMut(&[Option<usize>]) -> bool + 'a;

pub fn ullmann_mono<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, callback: &mut Callback<'_>) -> bool {
    ullmann(g, h, vertex_eq, Semantic::Mono, callback)
}

pub fn ullmann_induced<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, callback: &mut Callback<'_>) -> bool {
    ullmann(g, h, vertex_eq, Semantic::Induced, callback)
}

fn ullmann<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, semantic: Semantic, callback: &mut Callback<'_>) -> bool {
    let g_view = AdjacencyMatrixView::new(g);
    let h_view = AdjacencyMatrixView::new(h);
    let order = order_deg(g);
    let m = g.num_vertices();
    let mut state: UllmannState<_, _, LogMatrix, _> =
        UllmannState::new(&g_view, &h_view, vertex_eq, order, semantic);
    explore(&mut state, &mut |s| {
        let mapping: Vec<Option<usize>> = (0..m).map(|x| s.mapped(x)).collect();
        callback(&mapping)
    })
}

pub fn simple_mono<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    simple(g, h, vertex_eq, edge_eq, Semantic::Mono, callback)
}

pub fn simple_induced<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    simple(g, h, vertex_eq, edge_eq, Semantic::Induced, callback)
}

fn simple<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    semantic: Semantic,
    callback: &mut Callback<'_>,
) -> bool {
    let order = order_deg(g);
    let m = g.num_vertices();
    let mut state = SimpleState::new(g, h, vertex_eq, edge_eq, order, semantic);
    explore(&mut state, &mut |s| {
        let mapping: Vec<Option<usize>> = (0..m).map(|x| s.mapped(x)).collect();
        callback(&mapping)
    })
}

pub fn ri_mono<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    ri(g, h, vertex_eq, edge_eq, Semantic::Mono, callback)
}

pub fn ri_induced<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    ri(g, h, vertex_eq, edge_eq, Semantic::Induced, callback)
}

fn ri<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    semantic: Semantic,
    callback: &mut Callback<'_>,
) -> bool {
    let order = order_greatest_constraint_first(g);
    let m = g.num_vertices();
    let mut state = RiState::new(g, h, vertex_eq, edge_eq, order, semantic);
    explore(&mut state, &mut |s| {
        let mapping: Vec<Option<usize>> = (0..m).map(|x| s.mapped(x)).collect();
        callback(&mapping)
    })
}

pub fn ri2_mono<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    ri2(g, h, vertex_eq, edge_eq, Semantic::Mono, callback)
}

pub fn ri2_induced<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    callback: &mut Callback<'_>,
) -> bool {
    ri2(g, h, vertex_eq, edge_eq, Semantic::Induced, callback)
}

fn ri2<Vx: VertexEq, Ex: EdgeEq>(
    g: &Graph,
    h: &Graph,
    vertex_eq: Vx,
    edge_eq: Ex,
    semantic: Semantic,
    callback: &mut Callback<'_>,
) -> bool {
    let order = order_greatest_constraint_first(g);
    let m = g.num_vertices();
    let mut state = Ri2State::new(g, h, vertex_eq, edge_eq, order, semantic);
    explore(&mut state, &mut |s| {
        let mapping: Vec<Option<usize>> = (0..m).map(|x| s.mapped(x)).collect();
        callback(&mapping)
    })
}

pub fn dynamic_mono<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, callback: &mut Callback<'_>) -> bool {
    dynamic(g, h, vertex_eq, Semantic::Mono, callback)
}

pub fn dynamic_induced<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, callback: &mut Callback<'_>) -> bool {
    dynamic(g, h, vertex_eq, Semantic::Induced, callback)
}

fn dynamic<Vx: VertexEq>(g: &Graph, h: &Graph, vertex_eq: Vx, semantic: Semantic, callback: &mut Callback<'_>) -> bool {
    let m = g.num_vertices();
    let mut state: DynamicState<_, _, LogMatrix, _> = DynamicState::new(g, h, vertex_eq, semantic);
    explore(&mut state, &mut |s| {
        let mapping: Vec<Option<usize>> = (0..m).map(|x| s.mapped(x)).collect();
        callback(&mapping)
    })
}

/// The five recipe families this crate builds end-to-end, named as in
/// `original_source/include/predefined.h`. `spec.md` §4.5.1's remaining
/// taxonomy rows are further compositions of the same shared functions
/// over a different candidate source or refinement order (DESIGN.md).
pub const RECIPE_NAMES: [&str; 5] = ["ullmann", "simple", "ri", "ri2", "dynamic"];

/// Runs the named recipe with no custom predicates, counting every match
/// found; stops early once `limit` (if given) is reached. Used by the CLI.
pub fn count_matches(recipe: &str, induced: bool, g: &Graph, h: &Graph, limit: Option<usize>) -> Result<usize, String> {
    let mut count = 0usize;
    let mut callback = |_: &[Option<usize>]| {
        count += 1;
        match limit {
            Some(limit) => count < limit,
            None => true,
        }
    };
    let proceed = match (recipe, induced) {
        ("ullmann", false) => ullmann_mono(g, h, AlwaysTrue, &mut callback),
        ("ullmann", true) => ullmann_induced(g, h, AlwaysTrue, &mut callback),
        ("simple", false) => simple_mono(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("simple", true) => simple_induced(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("ri", false) => ri_mono(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("ri", true) => ri_induced(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("ri2", false) => ri2_mono(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("ri2", true) => ri2_induced(g, h, AlwaysTrue, AlwaysTrue, &mut callback),
        ("dynamic", false) => dynamic_mono(g, h, AlwaysTrue, &mut callback),
        ("dynamic", true) => dynamic_induced(g, h, AlwaysTrue, &mut callback),
        _ => return Err(format!("unknown recipe {recipe:?}, expected one of {RECIPE_NAMES:?}")),
    };
    let _ = proceed;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_agrees_across_recipes_for_a_small_instance() {
        let g = Graph::new(3, [(0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2)]);
        let h = Graph::new(
            4,
            [(0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2), (0, 3), (3, 0), (1, 3), (3, 1), (2, 3), (3, 2)],
        );
        for recipe in RECIPE_NAMES {
            let count = count_matches(recipe, true, &g, &h, None).unwrap();
            assert_eq!(count, 4 * 3 * 2, "recipe {recipe} disagreed on induced match count");
        }
    }

    #[test]
    fn unknown_recipe_is_an_error() {
        let g = Graph::new(1, []);
        assert!(count_matches("nonexistent", false, &g, &g, None).is_err());
    }

    #[test]
    fn limit_stops_enumeration_early() {
        let g = Graph::new(1, []);
        let h = Graph::new(3, []);
        let count = count_matches("simple", false, &g, &h, Some(1)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn simple_mono_honors_a_custom_vertex_predicate() {
        let g = Graph::new(1, []);
        let h = Graph::new(2, []);
        let labels_g = ["x"];
        let labels_h = ["y", "x"];
        let vertex_eq = crate::predicates::LabelEq { g_labels: &labels_g, h_labels: &labels_h };
        let mut mapped = Vec::new();
        simple_mono(&g, &h, vertex_eq, AlwaysTrue, &mut |m| {
            mapped.push(m.to_vec());
            true
        });
        assert_eq!(mapped, vec![vec![Some(1)]]);
    }
}
