use super::card::Card;
use super::ruleset::Ruleset;
use super::strength::Strength;

/// Cards per dealt hand.
pub const HAND_SIZE: usize = 5;

/// Five cards dealt to one seat.
///
/// Deal order is preserved for display; evaluation is rank-histogram based
/// and does not depend on it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn strength(&self, ruleset: Ruleset) -> Strength {
        Strength::from((ruleset, *self))
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}
