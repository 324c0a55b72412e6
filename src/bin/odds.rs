use anyhow::Result;
use clap::Parser;
use deckhand::cards::ruleset::Ruleset;
use deckhand::driver::report::Report;
use deckhand::driver::report::TextReport;
use deckhand::driver::trial::Tally;
use deckhand::driver::trial::Trials;
use deckhand::driver::trial::DEFAULT_TRIALS;
use std::fs::File;
use std::path::PathBuf;

/// Estimate hand category frequencies over repeated independent deals.
#[derive(Parser)]
#[command(name = "odds")]
struct Args {
    /// Ruleset to deal under (poker or widget).
    #[arg(long, default_value = "poker")]
    ruleset: Ruleset,
    /// Number of independent deals.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Generator seed; omitted means a random batch.
    #[arg(long)]
    seed: Option<u64>,
    /// Frequency table destination.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    deckhand::log();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}HandProbabilities.txt", args.ruleset)));
    let trials = Trials::new(args.ruleset, args.trials)?;
    log::info!(
        "dealing {} trials of {} hands each under {} rules (seed {})",
        trials.trials(),
        trials.hands_per_deal(),
        trials.ruleset(),
        seed
    );
    let tally = run(&trials, seed)?;
    let mut report = TextReport::new(args.ruleset, File::create(&out)?);
    report.tally(&tally)?;
    log::info!("wrote {}", out.display());
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn run(trials: &Trials, seed: u64) -> Result<Tally, deckhand::Error> {
    trials.run(seed)
}

#[cfg(feature = "parallel")]
fn run(trials: &Trials, seed: u64) -> Result<Tally, deckhand::Error> {
    trials.run_parallel(seed)
}
