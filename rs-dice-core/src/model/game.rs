use std::str::FromStr;

use crate::error::{DiceError, ValidationError};
use crate::model::die::{Die, Face};
use crate::model::table::{Cell, Table};

/// Shape of the table returned by [`Game::results`].
///
/// # Variants
/// - `Wide`: one row per trial, one outcome column per die position.
/// - `Narrow`: one row per (trial, position) pair, long format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsForm {
	Wide,
	Narrow,
}

impl FromStr for ResultsForm {
	type Err = DiceError;

	/// Parses the textual selectors `"wide"` and `"narrow"`.
	///
	/// # Errors
	/// `ValidationError::UnknownForm` for any other value.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"wide" => Ok(ResultsForm::Wide),
			"narrow" => Ok(ResultsForm::Narrow),
			other => Err(ValidationError::UnknownForm { form: other.to_owned() }.into()),
		}
	}
}

/// A game rolls an ordered collection of dice over repeated trials and
/// records the outcomes as a trial-indexed table.
///
/// Rolling "the same die" in several positions is expressed by cloning
/// it into each position; dice inside a game are re-weighted between
/// plays through [`Game::die_mut`].
///
/// # Responsibilities
/// - Own the dice and the trial table
/// - Execute repeated simultaneous rolls (`play`)
/// - Re-shape the table wide or narrow on demand (`results`)
///
/// # Invariants
/// - At least one die
/// - Every stored trial row has exactly one outcome per die
/// - The table is replaced wholesale by `play`, never appended to
#[derive(Clone, Debug)]
pub struct Game {
	dice: Vec<Die>,
	rolls: Option<Vec<Vec<Face>>>,
}

impl Game {
	/// Creates a game over an ordered, non-empty collection of dice.
	///
	/// # Errors
	/// `ValidationError::EmptyDice` if `dice` is empty.
	pub fn new(dice: Vec<Die>) -> Result<Self, DiceError> {
		if dice.is_empty() {
			return Err(ValidationError::EmptyDice.into());
		}
		Ok(Self { dice, rolls: None })
	}

	/// Plays the game: `num_trials` sequential trials, each rolling
	/// every die once, in die order.
	///
	/// The new table replaces any previous results in a single
	/// assignment; a prior play's rows are discarded, not merged, and
	/// no partially-written table is ever observable.
	///
	/// # Errors
	/// `ValidationError::ZeroTrials` if `num_trials` is 0.
	pub fn play(&mut self, num_trials: usize) -> Result<(), DiceError> {
		if num_trials == 0 {
			return Err(ValidationError::ZeroTrials.into());
		}

		let mut rows = Vec::with_capacity(num_trials);
		for _ in 0..num_trials {
			rows.push(self.dice.iter().map(Die::roll_once).collect());
		}
		self.rolls = Some(rows);
		Ok(())
	}

	/// Returns a copy of the most recent play's results.
	///
	/// Trial numbers are 1-based. Wide form has columns
	/// `trial, die0..die{K-1}`; narrow form has `trial, die, outcome`
	/// with one row per (trial, position) pair. An unplayed game yields
	/// an empty table with the matching header.
	pub fn results(&self, form: ResultsForm) -> Table {
		let rows: &[Vec<Face>] = self.rolls.as_deref().unwrap_or(&[]);

		match form {
			ResultsForm::Wide => {
				let mut columns = vec!["trial".to_owned()];
				columns.extend((0..self.dice.len()).map(|i| format!("die{}", i)));
				let mut table = Table::new(columns);
				for (trial, row) in rows.iter().enumerate() {
					let mut cells = vec![Cell::Int(trial as u64 + 1)];
					cells.extend(row.iter().cloned().map(Cell::Face));
					table.push_row(cells);
				}
				table
			}
			ResultsForm::Narrow => {
				let mut table = Table::new(vec!["trial", "die", "outcome"]);
				for (trial, row) in rows.iter().enumerate() {
					for (position, face) in row.iter().enumerate() {
						table.push_row(vec![
							Cell::Int(trial as u64 + 1),
							Cell::Int(position as u64),
							Cell::Face(face.clone()),
						]);
					}
				}
				table
			}
		}
	}

	/// Returns the dice in position order.
	pub fn dice(&self) -> &[Die] {
		&self.dice
	}

	/// Returns a mutable handle on the die at `position`, for
	/// re-weighting between plays.
	pub fn die_mut(&mut self, position: usize) -> Option<&mut Die> {
		self.dice.get_mut(position)
	}

	/// Raw trial rows of the most recent play, `None` if never played.
	pub(crate) fn rolls(&self) -> Option<&[Vec<Face>]> {
		self.rolls.as_deref()
	}

	/// Test hook: installs a hand-written trial table.
	#[cfg(test)]
	pub(crate) fn seed_rolls(&mut self, rows: Vec<Vec<Face>>) {
		self.rolls = Some(rows);
	}
}
