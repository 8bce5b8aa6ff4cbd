use rs_dice_core::model::analyzer::Analyzer;
use rs_dice_core::model::die::Die;
use rs_dice_core::model::game::{Game, ResultsForm};

mod io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A fair coin: two faces, default weight 1.0 each
    let coin = Die::new(vec!["H", "T"])?;
    println!("Fair coin:\n{}", coin.show());

    // Play two coins for a handful of trials and show both result forms
    let mut game = Game::new(vec![coin.clone(), coin.clone()])?;
    game.play(4)?;
    println!("Wide results:\n{}", game.results(ResultsForm::Wide));
    println!("Narrow results:\n{}", game.results(ResultsForm::Narrow));

    // The form selector is also parseable from text, for string-driven callers
    match "sideways".parse::<ResultsForm>() {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("'sideways' is not a results form, use 'wide' or 'narrow'"),
    }

    // Asking for a face the die does not have
    let mut loaded = Die::new(vec!["H", "T"])?;
    match loaded.set_weight("X", 2.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This coin has no 'X' face"),
    }

    // Zero and negative weights are rejected
    match loaded.set_weight("H", 0.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Weight 0.0 is invalid, weights must be > 0"),
    }

    // Load one side: 9:1 in favor of heads
    loaded.set_weight("H", 9.0)?;

    // Jackpot comparison: fair pair vs loaded pair over the same trial count
    let trials = 1000;
    let mut fair_game = Game::new(vec![coin.clone(), coin])?;
    let mut loaded_game = Game::new(vec![loaded.clone(), loaded])?;
    fair_game.play(trials)?;
    loaded_game.play(trials)?;

    let fair_jackpots = Analyzer::new(&fair_game).jackpot()?;
    let loaded_jackpots = Analyzer::new(&loaded_game).jackpot()?;
    log::info!("jackpots over {} trials: fair={} loaded={}", trials, fair_jackpots, loaded_jackpots);
    println!(
        "Jackpots over {} trials: fair coins {}, loaded coins {}",
        trials, fair_jackpots, loaded_jackpots
    );

    // Three six-sided dice: combination frequencies over 1000 trials
    let d6 = Die::new(vec![1, 2, 3, 4, 5, 6])?;
    let mut dice_game = Game::new(vec![d6.clone(), d6.clone(), d6])?;
    dice_game.play(trials)?;
    let analyzer = Analyzer::new(&dice_game);
    println!("Combination counts for 3d6, {} trials:\n{}", trials, analyzer.combo_count()?);

    // Face counts export as JSON for external tooling
    let face_counts = Analyzer::new(&fair_game).face_count()?;
    println!("Face counts as JSON: {}", serde_json::to_string(&face_counts)?);

    // Optional: build a die from a delimited face/weight file
    if let Some(path) = std::env::args().nth(1) {
        log::info!("loading face list from {}", path);
        let lines = io::read_file(&path)?;
        let (faces, weights) = io::parse_faces(&lines)?;
        let die = Die::with_weights(faces, weights)?;
        println!("Loaded die from {}:\n{}", path, die.show());
        let rolls: Vec<String> = die.roll(10)?.iter().map(ToString::to_string).collect();
        println!("10 rolls: {}", rolls.join(" "));
    }

    Ok(())
}
