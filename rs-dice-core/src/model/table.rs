use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::die::Face;

/// A single typed cell of a [`Table`].
///
/// # Variants
/// - `Face`: an outcome label (wide/narrow results, grouping keys).
/// - `Int`: a count or a trial number.
/// - `Float`: a weight.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Cell {
	Face(Face),
	Int(u64),
	Float(f64),
}

impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Cell::Face(face) => write!(f, "{}", face),
			Cell::Int(n) => write!(f, "{}", n),
			Cell::Float(x) => write!(f, "{}", x),
		}
	}
}

/// Row-oriented table with named, ordered columns.
///
/// This is the tabular return value of the whole crate: game results and
/// every analyzer aggregation come back as a `Table`. Returned tables are
/// always fresh copies, never views into live simulation state.
///
/// # Column vocabulary
/// - `trial`: 1-based trial number
/// - `die`: 0-based die position
/// - `die0`..`die{K-1}`: per-position outcome columns
/// - `outcome`, `count`, `face`, `weight`
///
/// # Invariants
/// - Every row has exactly one cell per column.
/// - Column names are unique within a table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Table {
	columns: Vec<String>,
	rows: Vec<Vec<Cell>>,
}

impl Table {
	/// Creates an empty table with the given column headers.
	pub(crate) fn new<S: Into<String>>(columns: Vec<S>) -> Self {
		Self {
			columns: columns.into_iter().map(Into::into).collect(),
			rows: Vec::new(),
		}
	}

	/// Appends a row. The row must have one cell per column.
	pub(crate) fn push_row(&mut self, row: Vec<Cell>) {
		debug_assert_eq!(row.len(), self.columns.len());
		self.rows.push(row);
	}

	/// Returns the ordered column headers.
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Returns all rows in insertion order.
	pub fn rows(&self) -> &[Vec<Cell>] {
		&self.rows
	}

	/// Returns the number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns `true` if the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns the position of a column by name, if present.
	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c == name)
	}

	/// Returns the cell at (row, column), if both exist.
	pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
		self.rows.get(row)?.get(column)
	}
}

impl fmt::Display for Table {
	/// Renders the table as an aligned text grid, header first.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
		let rendered: Vec<Vec<String>> = self
			.rows
			.iter()
			.map(|row| row.iter().map(Cell::to_string).collect())
			.collect();
		for row in &rendered {
			for (i, cell) in row.iter().enumerate() {
				if cell.len() > widths[i] {
					widths[i] = cell.len();
				}
			}
		}

		for (i, name) in self.columns.iter().enumerate() {
			if i > 0 {
				write!(f, "  ")?;
			}
			write!(f, "{:<width$}", name, width = widths[i])?;
		}
		writeln!(f)?;
		for row in &rendered {
			for (i, cell) in row.iter().enumerate() {
				if i > 0 {
					write!(f, "  ")?;
				}
				write!(f, "{:<width$}", cell, width = widths[i])?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Table {
		let mut table = Table::new(vec!["trial", "outcome"]);
		table.push_row(vec![Cell::Int(1), Cell::Face(Face::from("H"))]);
		table.push_row(vec![Cell::Int(2), Cell::Face(Face::from("T"))]);
		table
	}

	#[test]
	fn test_indexing() {
		let table = sample();
		assert_eq!(table.len(), 2);
		assert!(!table.is_empty());
		assert_eq!(table.column_index("outcome"), Some(1));
		assert_eq!(table.column_index("weight"), None);
		assert_eq!(table.cell(0, 1), Some(&Cell::Face(Face::from("H"))));
		assert_eq!(table.cell(2, 0), None);
	}

	#[test]
	fn test_display_grid() {
		let text = sample().to_string();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "trial  outcome");
		assert!(lines[1].starts_with("1"));
	}

	#[test]
	fn test_json_export() {
		let json = serde_json::to_string(&sample()).unwrap();
		assert!(json.contains("\"columns\""));
		assert!(json.contains("\"trial\""));
	}
}
