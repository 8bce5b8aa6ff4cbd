use std::collections::{BTreeMap, BTreeSet};

use crate::error::DiceError;
use crate::model::die::Face;
use crate::model::game::Game;
use crate::model::table::{Cell, Table};

/// Read-only statistics over a played [`Game`].
///
/// The analyzer borrows the game, so it always reads the game's current
/// table: re-playing the game is immediately visible through an existing
/// analyzer. Every method recomputes its view on demand and never
/// mutates the game.
///
/// Every method fails with [`DiceError::NotPlayed`] if the game has
/// never been played.
pub struct Analyzer<'a> {
	game: &'a Game,
}

impl<'a> Analyzer<'a> {
	/// Creates an analyzer over a game.
	pub fn new(game: &'a Game) -> Self {
		Self { game }
	}

	/// The game's trial rows, or `NotPlayed` if there are none yet.
	fn rows(&self) -> Result<&'a [Vec<Face>], DiceError> {
		self.game.rolls().ok_or(DiceError::NotPlayed)
	}

	/// Counts the trials in which every die produced the same face.
	///
	/// A single-die game makes every trial a jackpot.
	///
	/// # Errors
	/// `DiceError::NotPlayed` if the game was never played.
	pub fn jackpot(&self) -> Result<u64, DiceError> {
		let rows = self.rows()?;
		let count = rows
			.iter()
			.filter(|row| row.iter().all(|face| *face == row[0]))
			.count();
		Ok(count as u64)
	}

	/// Counts how many times each face appeared within each trial.
	///
	/// Columns are `trial` plus one column per face in the union of
	/// faces actually rolled anywhere in the table, in ascending face
	/// order; a face absent from a trial counts 0.
	///
	/// # Errors
	/// `DiceError::NotPlayed` if the game was never played.
	pub fn face_count(&self) -> Result<Table, DiceError> {
		let rows = self.rows()?;

		let observed: BTreeSet<&Face> = rows.iter().flatten().collect();

		let mut columns = vec!["trial".to_owned()];
		columns.extend(observed.iter().map(|face| face.to_string()));
		let mut table = Table::new(columns);

		for (trial, row) in rows.iter().enumerate() {
			let mut cells = vec![Cell::Int(trial as u64 + 1)];
			for face in &observed {
				let count = row.iter().filter(|f| f == face).count();
				cells.push(Cell::Int(count as u64));
			}
			table.push_row(cells);
		}
		Ok(table)
	}

	/// Counts distinct combinations of faces rolled, order-independent.
	///
	/// One row per multiset that occurred in at least one trial: the
	/// multiset's faces in ascending order, then a `count` column.
	/// Rows are sorted by descending count, ties broken by ascending
	/// key order.
	///
	/// # Errors
	/// `DiceError::NotPlayed` if the game was never played.
	pub fn combo_count(&self) -> Result<Table, DiceError> {
		self.grouped(|row| {
			let mut key = row.to_vec();
			key.sort();
			key
		})
	}

	/// Counts distinct permutations of faces rolled, order-dependent.
	///
	/// Same layout as [`Analyzer::combo_count`], keyed by the ordered
	/// tuple; ties broken by ascending lexicographic order.
	///
	/// # Errors
	/// `DiceError::NotPlayed` if the game was never played.
	pub fn perm_count(&self) -> Result<Table, DiceError> {
		self.grouped(|row| row.to_vec())
	}

	/// Groups trial rows by `key`, counts group sizes, and lays the
	/// result out as key columns plus `count`.
	///
	/// Grouping in a `BTreeMap` yields ascending key order; the stable
	/// sort by descending count then preserves it among equal counts.
	fn grouped<K>(&self, key: K) -> Result<Table, DiceError>
	where
		K: Fn(&[Face]) -> Vec<Face>,
	{
		let rows = self.rows()?;

		let mut groups: BTreeMap<Vec<Face>, u64> = BTreeMap::new();
		for row in rows {
			*groups.entry(key(row.as_slice())).or_insert(0) += 1;
		}

		let mut entries: Vec<(Vec<Face>, u64)> = groups.into_iter().collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1));

		let positions = self.game.dice().len();
		let mut columns: Vec<String> = (0..positions).map(|i| format!("die{}", i)).collect();
		columns.push("count".to_owned());
		let mut table = Table::new(columns);

		for (faces, count) in entries {
			let mut cells: Vec<Cell> = faces.into_iter().map(Cell::Face).collect();
			cells.push(Cell::Int(count));
			table.push_row(cells);
		}
		Ok(table)
	}
}
