use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, ValidationError};
use crate::model::table::{Cell, Table};

/// A single face of a die.
///
/// Faces can be numeric (pips, point values) or textual (letters, coin
/// sides, symbols). Ordering is derived: numeric faces sort before
/// textual ones, then by natural order within each kind. That ordering
/// drives every deterministic tie-break and column layout in the crate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
	Num(i64),
	Text(String),
}

impl fmt::Display for Face {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Face::Num(n) => write!(f, "{}", n),
			Face::Text(s) => write!(f, "{}", s),
		}
	}
}

impl From<i64> for Face {
	fn from(n: i64) -> Self {
		Face::Num(n)
	}
}

impl From<i32> for Face {
	fn from(n: i32) -> Self {
		Face::Num(n as i64)
	}
}

impl From<&str> for Face {
	fn from(s: &str) -> Self {
		Face::Text(s.to_owned())
	}
}

impl From<String> for Face {
	fn from(s: String) -> Self {
		Face::Text(s)
	}
}

impl From<char> for Face {
	fn from(c: char) -> Self {
		Face::Text(c.to_string())
	}
}

/// A weighted die with a fixed, ordered set of unique faces.
///
/// Each face carries a mutable positive weight (1.0 by default) that
/// controls its relative roll probability. Faces are fixed at
/// construction; only weights change afterwards.
///
/// # Responsibilities
/// - Validate faces and weights at construction
/// - Roll weighted random faces with replacement
/// - Expose a read-only snapshot of the (face, weight) association
///
/// # Invariants
/// - Faces are unique and keep their construction order
/// - Every weight is finite and strictly positive
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Die {
	faces: Vec<Face>,
	weights: Vec<f64>,
}

impl Die {
	/// Creates a die where every face weighs 1.0.
	///
	/// # Errors
	/// - `ValidationError::EmptyFaces` if `faces` is empty.
	/// - `ValidationError::DuplicateFace` if a face appears twice.
	pub fn new<F: Into<Face>>(faces: Vec<F>) -> Result<Self, DiceError> {
		let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
		let weights = vec![1.0; faces.len()];
		Self::build(faces, weights)
	}

	/// Creates a die with an explicit weight per face.
	///
	/// `weights` is parallel to `faces`: same length, one weight per
	/// face, in order.
	///
	/// # Errors
	/// - `ValidationError::EmptyFaces` / `DuplicateFace` as in [`Die::new`].
	/// - `ValidationError::WeightCountMismatch` if the lengths differ.
	/// - `ValidationError::NonPositiveWeight` if any weight is not a
	///   finite number > 0.
	pub fn with_weights<F: Into<Face>>(faces: Vec<F>, weights: Vec<f64>) -> Result<Self, DiceError> {
		let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
		if weights.len() != faces.len() {
			return Err(ValidationError::WeightCountMismatch {
				expected: faces.len(),
				actual: weights.len(),
			}
			.into());
		}
		Self::build(faces, weights)
	}

	/// Shared constructor path: validates everything before committing.
	fn build(faces: Vec<Face>, weights: Vec<f64>) -> Result<Self, DiceError> {
		if faces.is_empty() {
			return Err(ValidationError::EmptyFaces.into());
		}

		let mut seen: HashSet<&Face> = HashSet::with_capacity(faces.len());
		for face in &faces {
			if !seen.insert(face) {
				return Err(ValidationError::DuplicateFace { face: face.clone() }.into());
			}
		}

		for weight in &weights {
			Self::validate_weight(*weight)?;
		}

		Ok(Self { faces, weights })
	}

	/// Rejects weights that are not finite numbers strictly above zero.
	fn validate_weight(weight: f64) -> Result<(), DiceError> {
		if !weight.is_finite() || weight <= 0.0 {
			return Err(ValidationError::NonPositiveWeight { weight }.into());
		}
		Ok(())
	}

	/// Replaces the weight of one face, leaving the others untouched.
	///
	/// The new weight is live for subsequent rolls only; past rolls are
	/// unaffected.
	///
	/// # Errors
	/// - `DiceError::FaceNotFound` if the face is not on this die.
	/// - `ValidationError::NonPositiveWeight` if the weight is invalid.
	///
	/// Nothing is mutated on failure.
	pub fn set_weight<F: Into<Face>>(&mut self, face: F, weight: f64) -> Result<(), DiceError> {
		let face = face.into();
		let index = self
			.faces
			.iter()
			.position(|f| *f == face)
			.ok_or(DiceError::FaceNotFound { face })?;
		Self::validate_weight(weight)?;
		self.weights[index] = weight;
		Ok(())
	}

	/// Rolls the die `count` times.
	///
	/// Each roll samples the full face set with replacement,
	/// independently, with probability proportional to the current
	/// weight.
	///
	/// # Errors
	/// - `ValidationError::ZeroRolls` if `count` is 0.
	pub fn roll(&self, count: usize) -> Result<Vec<Face>, DiceError> {
		if count == 0 {
			return Err(ValidationError::ZeroRolls.into());
		}

		let mut rng = rand::rng();
		Ok((0..count).map(|_| self.draw(&mut rng)).collect())
	}

	/// Rolls the die once. A die always has at least one face, so a
	/// single roll cannot fail.
	pub fn roll_once(&self) -> Face {
		self.draw(&mut rand::rng())
	}

	/// Draws one face by cumulative subtraction over the weights.
	///
	/// A uniform value in [0, total) is walked down the face order; the
	/// first face whose weight exceeds the remainder wins.
	fn draw(&self, rng: &mut impl Rng) -> Face {
		let total: f64 = self.weights.iter().sum();
		let mut r = rng.random_range(0.0..total);

		for (face, weight) in self.faces.iter().zip(&self.weights) {
			if r < *weight {
				return face.clone();
			}
			r -= weight;
		}

		// Float roundoff can exhaust the scan; the last face owns the
		// remainder of the interval.
		self.faces[self.faces.len() - 1].clone()
	}

	/// Returns the faces in construction order.
	pub fn faces(&self) -> &[Face] {
		&self.faces
	}

	/// Returns the current weight of a face, if it exists.
	pub fn weight<F: Into<Face>>(&self, face: F) -> Option<f64> {
		let face = face.into();
		let index = self.faces.iter().position(|f| *f == face)?;
		Some(self.weights[index])
	}

	/// Returns the number of faces.
	pub fn sides(&self) -> usize {
		self.faces.len()
	}

	/// Returns the current state of the die as a (face, weight) table,
	/// in construction order. Read-only snapshot, no side effects.
	pub fn show(&self) -> Table {
		let mut table = Table::new(vec!["face", "weight"]);
		for (face, weight) in self.faces.iter().zip(&self.weights) {
			table.push_row(vec![Cell::Face(face.clone()), Cell::Float(*weight)]);
		}
		table
	}
}
