//! The backtracking driver: the exact recursive contract of every
//! [`crate::state::MatchingState`] implementation.
//!
//! Grounded on the teacher's `try_match` stack-machine loop
//! (`crates/algorithms/src/isomorphism/matching.rs`), reshaped here to the
//! literal recursive pseudocode the states above are written against:
//! `advance` always brackets an `assign` attempt, `revert` always undoes it
//! (whether or not the assignment was feasible), and `push`/`pop` bracket
//! only the recursive descent taken after a successful `assign`.

use crate::state::MatchingState;

/// Explores every full assignment reachable from `state`'s current partial
/// mapping, calling `callback` once per full mapping found. `callback`
/// returns `true` to keep searching, `false` to stop; `explore` itself
/// returns that same flag, propagated out through every recursive level.
pub fn explore<S: MatchingState>(state: &mut S, callback: &mut impl FnMut(&S) -> bool) -> bool {
    if state.full() {
        return callback(state);
    }
    for y in state.candidates() {
        state.advance();
        let proceed = if state.assign(y) {
            state.push(y);
            let proceed = explore(state, callback);
            state.pop();
            proceed
        } else {
            true
        };
        state.revert();
        if !proceed {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::matrix::LogMatrix;
    use crate::order::order_deg;
    use crate::predicates::AlwaysTrue;
    use crate::state::{Semantic, UllmannState};

    #[test]
    fn explore_visits_every_full_mapping_when_callback_keeps_going() {
        let g = Graph::new(1, []);
        let h = Graph::new(3, []);
        let order = order_deg(&g);
        let mut state: UllmannState<_, _, LogMatrix, _> =
            UllmannState::new(&g, &h, AlwaysTrue, order, Semantic::Mono);
        let mut seen = Vec::new();
        explore(&mut state, &mut |s| {
            seen.push(s.mapped(0).unwrap());
            true
        });
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn explore_stops_when_callback_returns_false() {
        let g = Graph::new(1, []);
        let h = Graph::new(3, []);
        let order = order_deg(&g);
        let mut state: UllmannState<_, _, LogMatrix, _> =
            UllmannState::new(&g, &h, AlwaysTrue, order, Semantic::Mono);
        let mut seen = 0;
        let proceed = explore(&mut state, &mut |_| {
            seen += 1;
            false
        });
        assert!(!proceed);
        assert_eq!(seen, 1);
    }
}
