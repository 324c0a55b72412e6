use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use deckhand::cards::ruleset::Ruleset;
use deckhand::driver::report::Report;
use deckhand::driver::report::TextReport;
use deckhand::driver::session::GameResult;
use deckhand::driver::session::Session;
use deckhand::driver::session::MAX_GAMES;
use deckhand::driver::session::MAX_PLAYERS;
use deckhand::driver::session::MIN_GAMES;
use deckhand::driver::session::MIN_PLAYERS;
use dialoguer::Input;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

/// Play games of five-card showdown and report each winner.
#[derive(Parser)]
#[command(name = "showdown")]
struct Args {
    /// Ruleset to deal under (poker or widget).
    #[arg(long, default_value = "poker")]
    ruleset: Ruleset,
    /// Generator seed; omitted means a random session.
    #[arg(long)]
    seed: Option<u64>,
    /// Game report destination.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    deckhand::log();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}HandResults.txt", args.ruleset)));
    let games = ask(
        format!(
            "How many games of {}? (between {} and {} inclusive)",
            args.ruleset, MIN_GAMES, MAX_GAMES
        ),
        MIN_GAMES,
        MAX_GAMES,
    );
    let session = Session::new(args.ruleset, games)?;
    let seats = (0..games)
        .map(|game| {
            ask(
                format!(
                    "Game {}: how many players? (between {} and {} inclusive)",
                    game + 1,
                    MIN_PLAYERS,
                    MAX_PLAYERS
                ),
                MIN_PLAYERS,
                MAX_PLAYERS,
            )
        })
        .collect::<Vec<usize>>();
    log::info!("playing {} games under {} rules (seed {})", games, args.ruleset, seed);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let ref mut report = Echo {
        file: TextReport::new(args.ruleset, File::create(&out)?),
    };
    session.play(&seats, rng, report)?;
    log::info!("wrote {}", out.display());
    Ok(())
}

/// Prompt until the answer is a number within bounds.
fn ask(prompt: String, lo: usize, hi: usize) -> usize {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.parse::<usize>() {
                Ok(n) if (lo..=hi).contains(&n) => Ok(()),
                Ok(_) => Err("Out of range"),
                Err(_) => Err("Enter a NUMBER"),
            }
        })
        .interact()
        .unwrap()
        .parse::<usize>()
        .unwrap()
}

/// File report plus a colored winner line on the terminal.
struct Echo<W: Write> {
    file: TextReport<W>,
}

impl<W: Write> Report for Echo<W> {
    fn begin(&mut self, games: usize) -> io::Result<()> {
        self.file.begin(games)
    }
    fn game(&mut self, game: usize, result: &GameResult) -> io::Result<()> {
        self.file.game(game, result)?;
        let line = match result.winners.as_slice() {
            [winner] => format!(
                "game {}: player {} wins with a {}",
                game,
                winner + 1,
                result.strengths[*winner].ranking()
            ),
            winners => format!(
                "game {}: {} split it with a {}",
                game,
                winners
                    .iter()
                    .map(|winner| format!("player {}", winner + 1))
                    .collect::<Vec<_>>()
                    .join(", "),
                result.strengths[winners[0]].ranking()
            ),
        };
        println!("{}", line.green().bold());
        Ok(())
    }
}
