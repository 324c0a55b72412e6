use crate::cards::deck::Deck;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::HAND_SIZE;
use crate::cards::ranking::Ranking;
use crate::cards::ruleset::Ruleset;
use crate::error::Error;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// Default batch size for a probability run.
pub const DEFAULT_TRIALS: usize = 600_000;

/// A batch of independent probability trials.
///
/// Each trial rebuilds and reshuffles a deck, deals as many disjoint hands
/// as the deck allows, and scores every hand against the category list.
/// Hands are never compared to each other in this mode.
#[derive(Debug, Clone, Copy)]
pub struct Trials {
    ruleset: Ruleset,
    trials: usize,
    hands_per_deal: usize,
}

impl Trials {
    pub fn new(ruleset: Ruleset, trials: usize) -> Result<Self, Error> {
        if trials == 0 {
            return Err(Error::Configuration(
                "trial count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            ruleset,
            trials,
            hands_per_deal: ruleset.deck_size() / HAND_SIZE,
        })
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn hands_per_deal(&self) -> usize {
        self.hands_per_deal
    }

    /// Runs the whole batch with a single seeded generator.
    pub fn run(&self, seed: u64) -> Result<Tally, Error> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tally = Tally::new(self.ruleset);
        for _ in 0..self.trials {
            self.deal_once(&mut rng, &mut tally)?;
        }
        log::info!("tallied {} hands over {} trials", tally.hands(), self.trials);
        Ok(tally)
    }

    /// Runs the batch across worker threads: one independently seeded
    /// generator per trial, per-worker partial tallies merged by addition.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self, seed: u64) -> Result<Tally, Error> {
        use rayon::prelude::*;
        let tally = (0..self.trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(trial as u64));
                let mut tally = Tally::new(self.ruleset);
                self.deal_once(&mut rng, &mut tally)?;
                Ok(tally)
            })
            .try_reduce(|| Tally::new(self.ruleset), |a, b| Ok(a.merge(b)))?;
        log::info!("tallied {} hands over {} trials", tally.hands(), self.trials);
        Ok(tally)
    }

    fn deal_once<R: Rng>(&self, rng: &mut R, tally: &mut Tally) -> Result<(), Error> {
        let mut deck = Deck::new(self.ruleset);
        deck.shuffle(rng);
        for hand in deck.deal(self.hands_per_deal)? {
            tally.record(Evaluator::from((self.ruleset, hand)).find_ranking());
        }
        Ok(())
    }
}

/// Category occurrence counts for one batch.
#[derive(Debug, Clone)]
pub struct Tally {
    ruleset: Ruleset,
    counts: [u64; Ranking::COUNT],
    hands: u64,
}

impl Tally {
    fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            counts: [0; Ranking::COUNT],
            hands: 0,
        }
    }

    fn record(&mut self, ranking: Ranking) {
        self.counts[ranking as usize] += 1;
        self.hands += 1;
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Tally) -> Tally {
        debug_assert!(self.ruleset == other.ruleset);
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self.hands += other.hands;
        self
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }
    /// Total hands scored: trials x hands per deal.
    pub fn hands(&self) -> u64 {
        self.hands
    }
    pub fn count(&self, ranking: Ranking) -> u64 {
        self.counts[ranking as usize]
    }
    /// Observed frequency of one category across every dealt hand.
    pub fn frequency(&self, ranking: Ranking) -> f64 {
        self.count(ranking) as f64 / self.hands as f64
    }
}
