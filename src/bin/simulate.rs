use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;

use word_bingo::errors::{BingoError, BingoResult, InfrastructureError};
use word_bingo::simulation::{play_game, GameReport};
use word_bingo::{parse_cards, shuffle_rounds, Card, Language, WordBanks};

/// Plays simulated word bingo games with the given cards
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the banco_<CODE>.txt word banks
    #[arg(short, long, default_value = "word_banks")]
    word_banks: PathBuf,

    /// Text file with player markers and card lines
    #[arg(short, long)]
    cards: PathBuf,

    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    games: u64,

    /// Base seed; game i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every round of every game
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Print the game reports as JSON instead of the summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> BingoResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let banks = WordBanks::load_from_dir(&args.word_banks)?;
    let text = fs::read_to_string(&args.cards)
        .map_err(|e| InfrastructureError::cards_file(args.cards.display().to_string(), e))?;

    let outcome = parse_cards(&text, &banks, &HashSet::new());
    for error in &outcome.errors {
        log::warn!("{}", error);
    }
    if outcome.cards.is_empty() {
        return Err(BingoError::Validation(format!(
            "no valid cards in {}",
            args.cards.display()
        )));
    }

    // only languages with cards get a round
    let languages: Vec<Language> = Language::ALL
        .into_iter()
        .filter(|&language| outcome.cards.iter().any(|card| card.language() == language))
        .collect();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Simulating {} games with {} cards over {:?} (seed {})",
        args.games,
        outcome.cards.len(),
        languages,
        base_seed
    );

    let reports: Vec<GameReport> = (0..args.games)
        .into_par_iter()
        .map(|game| {
            let mut rng = XorShiftRng::seed_from_u64(base_seed.wrapping_add(game));
            let mut cards: Vec<Card> = outcome.cards.clone();
            let rounds = shuffle_rounds(&languages, &mut rng);
            play_game(&mut cards, &banks, &rounds, &mut rng)
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| BingoError::Validation(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    if args.verbose {
        for (game, report) in reports.iter().enumerate() {
            println!("Game {}", game + 1);
            for round in &report.rounds {
                let winners: Vec<String> = round
                    .winners
                    .iter()
                    .map(|w| format!("{} ({})", w.card_id, w.owner))
                    .collect();
                println!(
                    "  {}: {} calls, winners: [{}]",
                    round.language,
                    round.calls.len(),
                    winners.join(", ")
                );
            }
        }
    }

    print_summary(&reports);
    Ok(())
}

fn print_summary(reports: &[GameReport]) {
    let mut wins: BTreeMap<&str, usize> = BTreeMap::new();
    let mut total_calls = 0usize;
    let mut total_rounds = 0usize;

    for report in reports {
        for round in &report.rounds {
            total_calls += round.calls.len();
            total_rounds += 1;
        }
        for winner in report.winners() {
            *wins.entry(winner.owner.as_str()).or_default() += 1;
        }
    }

    println!("Results over {} games:", reports.len());
    for (owner, count) in &wins {
        println!("  {}: {} winning cards", owner, count);
    }
    if total_rounds > 0 {
        println!(
            "Average calls per round: {:.1}",
            total_calls as f64 / total_rounds as f64
        );
    }
}
