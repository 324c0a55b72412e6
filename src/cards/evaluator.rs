use super::hand::Hand;
use super::hand::HAND_SIZE;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::ruleset::Ruleset;

/// Histogram width; sized for the wider ruleset.
const MAX_RANKS: usize = 13;

/// Classifies one hand under one ruleset.
///
/// A pure function of the five cards: the rank histogram and flush flag are
/// computed once, then categories are searched from strongest to weakest.
/// Exactly one category matches any hand.
pub struct Evaluator {
    ruleset: Ruleset,
    counts: [u8; MAX_RANKS],
    flush: bool,
}

impl From<(Ruleset, Hand)> for Evaluator {
    fn from((ruleset, hand): (Ruleset, Hand)) -> Self {
        let mut counts = [0u8; MAX_RANKS];
        for card in hand.cards() {
            counts[card.rank().index()] += 1;
        }
        debug_assert!(counts.iter().map(|&c| c as usize).sum::<usize>() == HAND_SIZE);
        let flush = hand
            .cards()
            .iter()
            .all(|card| card.suit() == hand.cards()[0].suit());
        Self {
            ruleset,
            counts,
            flush,
        }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_5_oak())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::Bust)
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            Ranking::RoyalFlush => Kickers::default(),
            Ranking::StraightFlush | Ranking::Straight => {
                self.find_rank_of_straight().into_iter().collect()
            }
            Ranking::FiveOAK => self.ranks_of_count(5).collect(),
            Ranking::FourOAK => self.ranks_of_count(4).chain(self.ranks_of_count(1)).collect(),
            Ranking::FullHouse => self.ranks_of_count(3).chain(self.ranks_of_count(2)).collect(),
            Ranking::ThreeOAK => self.ranks_of_count(3).chain(self.ranks_of_count(1)).collect(),
            Ranking::TwoPair | Ranking::OnePair => {
                self.ranks_of_count(2).chain(self.ranks_of_count(1)).collect()
            }
            Ranking::Flush | Ranking::Bust => self.ranks_of_count(1).collect(),
        }
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        (self.ruleset.has_royal()
            && self.flush
            && self.find_rank_of_straight() == Some(self.ruleset.top_rank()))
        .then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.flush && self.find_rank_of_straight().is_some()).then_some(Ranking::StraightFlush)
    }
    fn find_5_oak(&self) -> Option<Ranking> {
        (self.ruleset.has_quints() && self.ranks_of_count(5).next().is_some())
            .then_some(Ranking::FiveOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.ranks_of_count(4).next().map(|_| Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.ranks_of_count(3).next().is_some() && self.ranks_of_count(2).next().is_some())
            .then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush.then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.ranks_of_count(3).next().map(|_| Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.ranks_of_count(2).count() == 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.ranks_of_count(2).next().map(|_| Ranking::OnePair)
    }

    /// The straight's high card, if the five ranks form a run.
    ///
    /// A run is five consecutive ranks present exactly once each. When the
    /// ruleset lets its top rank play low, the wheel (top rank under the
    /// four lowest) anchors at the fifth-lowest rank so it compares below
    /// every natural run.
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let n = self.ruleset.n_ranks() as usize;
        let run = |lo: usize| (lo..lo + HAND_SIZE).all(|r| self.counts[r] == 1);
        if let Some(lo) = (0..=n - HAND_SIZE).find(|&lo| run(lo)) {
            return Some(Rank::from((lo + HAND_SIZE - 1) as u8));
        }
        if self.ruleset.has_wheel()
            && self.counts[n - 1] == 1
            && (0..HAND_SIZE - 1).all(|r| self.counts[r] == 1)
        {
            return Some(Rank::from((HAND_SIZE - 2) as u8));
        }
        None
    }

    /// Ranks holding exactly n cards, highest first.
    fn ranks_of_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        (0..self.ruleset.n_ranks())
            .rev()
            .filter(move |&r| self.counts[r as usize] == n)
            .map(Rank::from)
    }
}
