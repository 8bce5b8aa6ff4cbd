//! Top-level module for the simulation system.
//!
//! This crate provides a weighted-die Monte Carlo simulator, including:
//! - Weighted discrete-outcome dice (`Die`)
//! - A multi-die trial recorder (`Game`)
//! - Frequency statistics over recorded trials (`Analyzer`)
//! - A typed tabular return value (`Table`)

/// A weighted die: ordered unique faces, each with a positive weight.
///
/// Supports weighted random rolls with replacement and live weight
/// updates between rolls.
pub mod die;

/// Trial recorder rolling one or more dice over repeated trials.
///
/// Stores outcomes as a trial-indexed table and re-shapes it into wide
/// or narrow form on demand.
pub mod game;

/// Read-only statistics over a played game.
///
/// Computes jackpot counts, per-trial face counts, and distinct
/// combination/permutation frequency tables.
pub mod analyzer;

/// Typed tabular return value shared by games and analyzers.
///
/// An ordered set of named columns over rows of typed cells, with an
/// aligned text rendering for terminal output.
pub mod table;
