//! End-to-end scenarios: build dice, play games, analyze results.

use rs_dice_core::error::DiceError;
use rs_dice_core::model::analyzer::Analyzer;
use rs_dice_core::model::die::{Die, Face};
use rs_dice_core::model::game::{Game, ResultsForm};
use rs_dice_core::model::table::{Cell, Table};

fn count_sum(table: &Table) -> u64 {
	let count_col = table.column_index("count").unwrap();
	table
		.rows()
		.iter()
		.map(|row| match row[count_col] {
			Cell::Int(n) => n,
			_ => 0,
		})
		.sum()
}

#[test]
fn coin_pair_game_has_expected_shape() {
	let coin = Die::new(vec!["H", "T"]).unwrap();
	let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
	game.play(4).unwrap();

	let wide = game.results(ResultsForm::Wide);
	assert_eq!(wide.len(), 4);
	assert_eq!(wide.columns().len(), 3);
	for row in wide.rows() {
		for cell in &row[1..] {
			assert!(matches!(
				cell,
				Cell::Face(Face::Text(s)) if s == "H" || s == "T"
			));
		}
	}

	let narrow = game.results(ResultsForm::Narrow);
	assert_eq!(narrow.len(), 4 * 2);
}

#[test]
fn deterministic_dice_always_jackpot() {
	let loaded = Die::new(vec!["H"]).unwrap();
	let mut game = Game::new(vec![loaded.clone(), loaded.clone(), loaded]).unwrap();
	game.play(4).unwrap();

	let analyzer = Analyzer::new(&game);
	assert_eq!(analyzer.jackpot().unwrap(), 4);
}

#[test]
fn jackpot_never_exceeds_trial_count() {
	let die = Die::new(vec![1, 2, 3, 4, 5, 6]).unwrap();
	let mut game = Game::new(vec![die.clone(), die]).unwrap();
	game.play(200).unwrap();

	let analyzer = Analyzer::new(&game);
	assert!(analyzer.jackpot().unwrap() <= 200);
}

#[test]
fn replay_discards_previous_results() {
	let die = Die::new(vec![1, 2, 3, 4, 5, 6]).unwrap();
	let mut game = Game::new(vec![die]).unwrap();
	game.play(100).unwrap();
	game.play(25).unwrap();

	assert_eq!(game.results(ResultsForm::Wide).len(), 25);
	let analyzer = Analyzer::new(&game);
	assert_eq!(count_sum(&analyzer.perm_count().unwrap()), 25);
}

#[test]
fn combo_and_perm_masses_equal_trial_count() {
	let die = Die::new(vec![1, 2, 3, 4, 5, 6]).unwrap();
	let mut game = Game::new(vec![die.clone(), die.clone(), die]).unwrap();
	game.play(300).unwrap();

	let analyzer = Analyzer::new(&game);
	assert_eq!(count_sum(&analyzer.combo_count().unwrap()), 300);
	assert_eq!(count_sum(&analyzer.perm_count().unwrap()), 300);
}

#[test]
fn loaded_coin_out_jackpots_fair_coin() {
	let fair = Die::new(vec!["H", "T"]).unwrap();
	let loaded = Die::with_weights(vec!["H", "T"], vec![9.0, 1.0]).unwrap();

	let mut fair_game = Game::new(vec![fair.clone(), fair]).unwrap();
	let mut loaded_game = Game::new(vec![loaded.clone(), loaded]).unwrap();
	fair_game.play(2000).unwrap();
	loaded_game.play(2000).unwrap();

	// Fair pair jackpots half the time; the 9:1 pair 82% of the time.
	let fair_jackpots = Analyzer::new(&fair_game).jackpot().unwrap();
	let loaded_jackpots = Analyzer::new(&loaded_game).jackpot().unwrap();
	assert!(loaded_jackpots > fair_jackpots);
}

#[test]
fn unplayed_game_analysis_fails_but_results_are_empty() {
	let game = Game::new(vec![Die::new(vec!["H", "T"]).unwrap()]).unwrap();
	assert!(game.results(ResultsForm::Wide).is_empty());

	let analyzer = Analyzer::new(&game);
	assert!(matches!(analyzer.jackpot(), Err(DiceError::NotPlayed)));
}

#[test]
fn results_table_exports_as_json() {
	let die = Die::new(vec![1, 2]).unwrap();
	let mut game = Game::new(vec![die]).unwrap();
	game.play(3).unwrap();

	let json = serde_json::to_string(&game.results(ResultsForm::Narrow)).unwrap();
	assert!(json.contains("\"outcome\""));
}
