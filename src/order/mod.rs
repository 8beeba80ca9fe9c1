//! Total vertex-order strategies over `V(G)`.
//!
//! Grounded on `original_source/include/vertex_order.h`; every algorithm
//! below is a direct transliteration of that header's loops, including the
//! exact double-counting in `clustering_score` and the 2-hop
//! `num_neighbourhood_vertices` estimate in `order_greatest_constraint_first`.

use crate::graph::Digraph;

/// Decreasing total degree. Ties keep the lower vertex index first (a
/// stable sort by `-degree`).
pub fn order_deg(g: &impl Digraph) -> Vec<usize> {
    let n = g.num_vertices();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&v| std::cmp::Reverse(g.degree(v)));
    order
}

/// `clust(v)`: for every `w` in `N(v) ∪ N⁻(v)`, count every `r` in
/// `N(w) ∪ N⁻(w)` such that `r` is adjacent to `v` in either direction.
/// This is a literal nested double-count, not a deduplicated set size:
/// the same `r` can be counted once per `w` that reaches it, and once per
/// direction of `w`'s own neighbourhood.
pub fn clustering_score(g: &impl Digraph, v: usize) -> usize {
    let mut count = 0usize;
    let is_neighbour = |r: usize| g.edge(r, v) || g.edge(v, r);
    for &w in g.adjacent_vertices(v) {
        for &r in g.adjacent_vertices(w) {
            if is_neighbour(r) {
                count += 1;
            }
        }
        for &r in g.inv_adjacent_vertices(w) {
            if is_neighbour(r) {
                count += 1;
            }
        }
    }
    for &w in g.inv_adjacent_vertices(v) {
        for &r in g.adjacent_vertices(w) {
            if is_neighbour(r) {
                count += 1;
            }
        }
        for &r in g.inv_adjacent_vertices(w) {
            if is_neighbour(r) {
                count += 1;
            }
        }
    }
    count
}

/// Iteratively picks the available vertex with the greatest number of
/// already-placed neighbours (`rdeg`), breaking ties by
/// `clustdeg(i) = clustering_score(i) + degree(i)`. Both comparisons are
/// strict (`>`), so the first vertex scanned wins any remaining tie.
pub fn order_rdeg_cnc(g: &impl Digraph) -> Vec<usize> {
    let n = g.num_vertices();
    let clustdeg: Vec<usize> = (0..n).map(|i| clustering_score(g, i) + g.degree(i)).collect();
    let mut rdeg = vec![0usize; n];
    let mut avail = vec![true; n];
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        let mut best: Option<usize> = None;
        for i in 0..n {
            if !avail[i] {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    (rdeg[i], clustdeg[i]) > (rdeg[b], clustdeg[b])
                }
            };
            if better {
                best = Some(i);
            }
        }
        let picked = best.expect("at least one available vertex while order is incomplete");
        avail[picked] = false;
        order.push(picked);
        for &w in g.adjacent_vertices(picked) {
            rdeg[w] += 1;
        }
        for &w in g.inv_adjacent_vertices(picked) {
            rdeg[w] += 1;
        }
    }
    order
}

/// Greatest-constraint-first: seed with the maximum-total-degree vertex,
/// then repeatedly pick the available vertex maximizing the rank tuple
/// `(num_visited_neighbours, num_neighbourhood_vertices, num_unvisited_neighbours)`
/// compared lexicographically with strict `>`.
pub fn order_greatest_constraint_first(g: &impl Digraph) -> Vec<usize> {
    let n = g.num_vertices();
    if n == 0 {
        return Vec::new();
    }

    let mut u0 = 0usize;
    for i in 1..n {
        if g.degree(i) > g.degree(u0) {
            u0 = i;
        }
    }

    let mut avail = vec![true; n];
    let mut avail_unv = vec![true; n];
    let mut order = Vec::with_capacity(n);

    let commit = |avail: &mut Vec<bool>, avail_unv: &mut Vec<bool>, order: &mut Vec<usize>, g: &dyn Digraph, u: usize| {
        avail[u] = false;
        order.push(u);
        for &v in g.adjacent_vertices(u) {
            avail_unv[v] = false;
        }
        for &v in g.inv_adjacent_vertices(u) {
            avail_unv[v] = false;
        }
    };
    commit(&mut avail, &mut avail_unv, &mut order, g, u0);

    let neighbours = |g: &dyn Digraph, u: usize| -> Vec<usize> {
        let mut vs: Vec<usize> = g.adjacent_vertices(u).to_vec();
        vs.extend_from_slice(g.inv_adjacent_vertices(u));
        vs
    };

    for _ in 1..n {
        let mut best: Option<(usize, (usize, usize, usize))> = None;
        for u in 0..n {
            if !avail[u] {
                continue;
            }
            let mut num_vis = 0usize;
            let mut num_unv = 0usize;
            let mut v_neigh = vec![false; n];
            for v in neighbours(g, u) {
                if !avail[v] {
                    num_vis += 1;
                } else {
                    if avail_unv[v] {
                        num_unv += 1;
                    }
                    for w in neighbours(g, v) {
                        if !avail[w] {
                            v_neigh[w] = true;
                        }
                    }
                }
            }
            let num_neigh = v_neigh.iter().filter(|&&b| b).count();
            let rank = (num_vis, num_neigh, num_unv);
            let better = match &best {
                None => true,
                Some((_, best_rank)) => rank > *best_rank,
            };
            if better {
                best = Some((u, rank));
            }
        }
        let (picked, _) = best.expect("at least one available vertex while order is incomplete");
        commit(&mut avail, &mut avail_unv, &mut order, g, picked);
    }
    order
}
