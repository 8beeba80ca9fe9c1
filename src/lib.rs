//! Backtracking subgraph isomorphism engine: induced and monomorphism
//! matching between directed, optionally vertex- and edge-labelled graphs.
//!
//! The engine is organised the way `spec.md`'s component table lays it out:
//! a read-only [`graph`] abstraction, [`order`]ing strategies, a versioned
//! [`matrix`] of live vertex pairs, a family of pluggable [`state`]s
//! implementing [`state::MatchingState`], and one [`explore`] driver that
//! talks to any of them. [`recipes`] wires the common combinations together
//! under the names `original_source/include/predefined.h` uses.

pub mod amalfi;
pub mod error;
pub mod explore;
pub mod graph;
pub mod matrix;
pub mod order;
pub mod predicates;
pub mod recipes;
pub mod state;

pub use explore::explore;
pub use graph::{AdjacencyMatrixView, Complement, Digraph, Graph};
pub use predicates::{AlwaysTrue, EdgeEq, LabelEq, VertexEq};
pub use state::{MatchingState, Semantic};
