//! Randomised invariant properties from `spec.md` §8: vertex orders are
//! permutations, `advance`/`revert` round-trips the compatibility matrix,
//! `num_candidates` always equals the live-cell row count, and every built
//! recipe agrees with a brute-force reference enumerator.

mod common;

use common::brute_force_count;
use proptest::prelude::*;
use subiso::matrix::{CompatibilityMatrix, LogMatrix};
use subiso::order::{order_deg, order_greatest_constraint_first, order_rdeg_cnc};
use subiso::recipes::{self, RECIPE_NAMES};
use subiso::{Digraph, Graph};

fn arb_graph(max_n: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * n).prop_map(move |bits| {
            let mut edges = Vec::new();
            for u in 0..n {
                for v in 0..n {
                    if u != v && bits[u * n + v] {
                        edges.push((u, v));
                    }
                }
            }
            Graph::new(n, edges)
        })
    })
}

proptest! {
    #[test]
    fn order_deg_is_always_a_permutation(g in arb_graph(8)) {
        let mut order = order_deg(&g);
        order.sort_unstable();
        prop_assert_eq!(order, (0..g.num_vertices()).collect::<Vec<_>>());
    }

    #[test]
    fn order_rdeg_cnc_is_always_a_permutation(g in arb_graph(8)) {
        let mut order = order_rdeg_cnc(&g);
        order.sort_unstable();
        prop_assert_eq!(order, (0..g.num_vertices()).collect::<Vec<_>>());
    }

    #[test]
    fn order_gcf_is_always_a_permutation(g in arb_graph(8)) {
        let mut order = order_greatest_constraint_first(&g);
        order.sort_unstable();
        prop_assert_eq!(order, (0..g.num_vertices()).collect::<Vec<_>>());
    }

    #[test]
    fn log_matrix_num_candidates_always_equals_live_cell_count(
        m in 1usize..6, n in 1usize..6,
        unsets in prop::collection::vec((0usize..6, 0usize..6), 0..20),
    ) {
        let mut matrix = LogMatrix::new(m, n, |i, j| (i + j) % 2 == 0);
        for (i, j) in unsets {
            matrix.unset(i % m, j % n);
        }
        for i in 0..m {
            let live = (0..n).filter(|&j| matrix.get(i, j)).count();
            prop_assert_eq!(matrix.num_candidates(i), live);
        }
    }

    #[test]
    fn log_matrix_advance_revert_round_trips_arbitrary_unset_sequences(
        m in 1usize..6, n in 1usize..6,
        unsets in prop::collection::vec((0usize..6, 0usize..6), 0..20),
    ) {
        let mut matrix = LogMatrix::new(m, n, |_, _| true);
        let before: Vec<bool> = (0..m).flat_map(|i| (0..n).map(move |j| (i, j))).map(|(i, j)| matrix.get(i, j)).collect();

        matrix.advance();
        for (i, j) in unsets {
            matrix.unset(i % m, j % n);
        }
        matrix.revert();

        let after: Vec<bool> = (0..m).flat_map(|i| (0..n).map(move |j| (i, j))).map(|(i, j)| matrix.get(i, j)).collect();
        prop_assert_eq!(before, after);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_built_recipe_agrees_with_brute_force_on_small_random_graphs(
        g in arb_graph(4), h in arb_graph(6),
    ) {
        for induced in [false, true] {
            let expected = brute_force_count(&g, &h, induced);
            for recipe in RECIPE_NAMES {
                let got = recipes::count_matches(recipe, induced, &g, &h, None).unwrap();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
