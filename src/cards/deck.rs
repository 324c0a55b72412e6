use super::card::Card;
use super::hand::Hand;
use super::hand::HAND_SIZE;
use super::ruleset::Ruleset;
use crate::error::Error;
use rand::Rng;

/// An ordered deck for one ruleset.
///
/// Built full, shuffled in place, consumed by dealing, and rebuilt for the
/// next trial or game. Invariant: every (suit, rank) combination present
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    ruleset: Ruleset,
    cards: Vec<Card>,
}

impl Deck {
    /// All suit x rank combinations, suit-major order.
    pub fn new(ruleset: Ruleset) -> Self {
        let cards = ruleset
            .suits()
            .flat_map(|suit| ruleset.ranks().map(move |rank| Card::from((suit, rank))))
            .collect();
        Self { ruleset, cards }
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// In-place Fisher-Yates: position i swaps with a uniform j in [i, len).
    ///
    /// Consumes exactly len - 1 range draws, so a seeded run is
    /// reproducible draw for draw.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.cards.len() - 1 {
            let j = rng.random_range(i..self.cards.len());
            self.cards.swap(i, j);
        }
    }

    /// Round-robin deal from the shuffled prefix: card i of hand j sits at
    /// deck[i * n_hands + j], the way a dealer pitches one card to each
    /// seat per pass.
    pub fn deal(&self, n_hands: usize) -> Result<Vec<Hand>, Error> {
        let need = n_hands * HAND_SIZE;
        if need > self.cards.len() {
            return Err(Error::ExhaustedDeck {
                need,
                have: self.cards.len(),
            });
        }
        Ok((0..n_hands)
            .map(|j| Hand::from(std::array::from_fn(|i| self.cards[i * n_hands + j])))
            .collect())
    }
}
