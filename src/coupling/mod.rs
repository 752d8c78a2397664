//! Pairwise coupling between services.
//!
//! Coupling between two services is a weighted sum of four signals, clamped
//! to 1.0:
//!
//! - direct dependencies between the pair, counted in both directions
//! - data entities both services claim to own
//! - interface types both services expose
//! - a flat addition when both carry the same domain tag
//!
//! The [`CouplingMatrix`] holds the score for every ordered pair and is the
//! source of merge candidates for the transformer.

pub mod matrix;

pub use matrix::{pairwise_coupling, CouplingMatrix, MergeCandidate};
