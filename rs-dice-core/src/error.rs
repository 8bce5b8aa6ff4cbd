//! Error types for the simulation crate.
//!
//! All errors are strongly typed using thiserror so callers can pattern
//! match on the exact condition. Validation failures are grouped in
//! `ValidationError`; lookup and lifecycle failures live directly on
//! `DiceError`.

use thiserror::Error;

use crate::model::die::Face;

/// Malformed constructor or method arguments.
///
/// Every variant is raised synchronously at the call that detects the
/// violation, before any state is mutated.
#[derive(Debug, Error)]
pub enum ValidationError {
	#[error("a die needs at least one face")]
	EmptyFaces,

	#[error("faces must be distinct, face {face} appears more than once")]
	DuplicateFace {
		face: Face,
	},

	#[error("expected {expected} weights, got {actual}")]
	WeightCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("weight must be a positive number, got {weight}")]
	NonPositiveWeight {
		weight: f64,
	},

	#[error("number of rolls must be at least 1")]
	ZeroRolls,

	#[error("a game needs at least one die")]
	EmptyDice,

	#[error("number of trials must be at least 1")]
	ZeroTrials,

	#[error("unknown results form {form:?}, expected \"wide\" or \"narrow\"")]
	UnknownForm {
		form: String,
	},
}

/// Top-level error type returned by every fallible operation.
#[derive(Debug, Error)]
pub enum DiceError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// A face label was referenced that does not exist on the die.
	#[error("face {face} not found on this die")]
	FaceNotFound {
		face: Face,
	},

	/// Analysis was requested before the game was ever played.
	#[error("no play results found, play the game first")]
	NotPlayed,
}
