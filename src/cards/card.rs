use super::rank::Rank;
use super::ruleset::Ruleset;
use super::suit::Suit;

/// An immutable (suit, rank) pair.
///
/// Cards are plain values with no identity beyond the pair; a freshly built
/// deck holds each combination exactly once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Position in a freshly built deck, suit-major.
    pub fn index(&self, ruleset: Ruleset) -> usize {
        self.suit.index() * ruleset.n_ranks() as usize + self.rank.index()
    }

    /// Display adapter resolving names through the ruleset tables,
    /// e.g. "ace of spades" or "one of red".
    pub fn named(&self, ruleset: Ruleset) -> Named {
        Named {
            card: *self,
            ruleset,
        }
    }
}

impl From<(Suit, Rank)> for Card {
    fn from((suit, rank): (Suit, Rank)) -> Self {
        Self { suit, rank }
    }
}

/// A card bound to its ruleset for display.
pub struct Named {
    card: Card,
    ruleset: Ruleset,
}

impl std::fmt::Display for Named {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} of {}",
            self.ruleset.rank_name(self.card.rank()),
            self.ruleset.suit_name(self.card.suit()),
        )
    }
}
