//! Text adjacency-matrix parsing helper shared by the integration tests.
//!
//! Grounded on the teacher's `parse_graph` in
//! `crates/algorithms/tests/test_isomorphism.rs` (and the top-level
//! `tests/iso.rs`'s `PETERSEN_A`/`PETERSEN_B`-style literals): each
//! whitespace-separated `0`/`1` word is one directed edge, row-major.

use subiso::{Digraph, Graph};

#[allow(dead_code)]
pub fn parse_graph(s: &str) -> Graph {
    let rows: Vec<Vec<usize>> = s
        .trim()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|word| word.parse::<usize>().expect("adjacency matrix entries must be 0 or 1"))
                .collect()
        })
        .collect();
    let n = rows.len();
    let mut edges = Vec::new();
    for (u, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), n, "adjacency matrix must be square");
        for (v, &cell) in row.iter().enumerate() {
            assert!(cell == 0 || cell == 1, "adjacency matrix entries must be 0 or 1");
            if cell == 1 {
                edges.push((u, v));
            }
        }
    }
    Graph::new(n, edges)
}

/// Brute-force reference enumerator: tries every injective map
/// `V(G) -> V(H)` directly, with no ordering or pruning strategy. Used by
/// the integration and property tests to cross-check every built recipe.
#[allow(dead_code)]
pub fn brute_force_count(g: &Graph, h: &Graph, induced: bool) -> usize {
    let m = g.num_vertices();
    let n = h.num_vertices();
    let mut used = vec![false; n];
    let mut assignment = vec![0usize; m];
    let mut count = 0usize;
    recurse(g, h, induced, 0, &mut used, &mut assignment, &mut count);
    return count;

    fn recurse(
        g: &Graph,
        h: &Graph,
        induced: bool,
        x: usize,
        used: &mut [bool],
        assignment: &mut [usize],
        count: &mut usize,
    ) {
        let m = g.num_vertices();
        let n = h.num_vertices();
        if x == m {
            *count += 1;
            return;
        }
        for y in 0..n {
            if used[y] {
                continue;
            }
            let mut ok = true;
            for x2 in 0..x {
                let y2 = assignment[x2];
                if induced {
                    if g.edge(x, x2) != h.edge(y, y2) || g.edge(x2, x) != h.edge(y2, y) {
                        ok = false;
                        break;
                    }
                } else if (g.edge(x, x2) && !h.edge(y, y2)) || (g.edge(x2, x) && !h.edge(y2, y)) {
                    ok = false;
                    break;
                }
            }
            if !ok {
                continue;
            }
            used[y] = true;
            assignment[x] = y;
            recurse(g, h, induced, x + 1, used, assignment, count);
            used[y] = false;
        }
    }
}
