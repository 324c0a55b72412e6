use crate::cards::strength::Strength;

/// Resolves one game's winner set from the per-seat strengths.
///
/// Comparison defers entirely to Strength's ordering; no category is
/// special-cased here. Equal-best hands all win, so the result is the
/// complete tied set rather than an arbitrary pick.
#[derive(Debug)]
pub struct Showdown(Vec<Strength>);

impl From<Vec<Strength>> for Showdown {
    fn from(strengths: Vec<Strength>) -> Self {
        Self(strengths)
    }
}

impl Showdown {
    pub fn best(&self) -> Option<&Strength> {
        self.0.iter().max()
    }

    /// Indices of every seat holding the best hand.
    pub fn winners(&self) -> Vec<usize> {
        self.best()
            .map(|best| {
                self.0
                    .iter()
                    .enumerate()
                    .filter(|(_, strength)| *strength == best)
                    .map(|(seat, _)| seat)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;
    use crate::cards::hand::HAND_SIZE;
    use crate::cards::rank::Rank;
    use crate::cards::ruleset::Ruleset;
    use crate::cards::suit::Suit;

    fn strength(cards: [(u8, u8); HAND_SIZE]) -> Strength {
        let cards = cards.map(|(s, r)| Card::from((Suit::from(s), Rank::from(r))));
        Strength::from((Ruleset::Standard, Hand::from(cards)))
    }

    #[test]
    fn single_winner() {
        let showdown = Showdown::from(vec![
            strength([(0, 0), (1, 0), (2, 3), (3, 5), (0, 7)]),  // pair of twos
            strength([(0, 12), (1, 12), (2, 3), (3, 5), (0, 7)]), // pair of aces
            strength([(0, 11), (1, 9), (2, 7), (3, 5), (0, 1)]),  // bust
        ]);
        assert_eq!(showdown.winners(), vec![1]);
    }

    #[test]
    fn kickers_split_same_category() {
        let showdown = Showdown::from(vec![
            strength([(0, 12), (1, 12), (2, 10), (3, 10), (0, 7)]), // aces and queens
            strength([(2, 12), (3, 12), (0, 11), (1, 11), (2, 0)]), // aces and kings
        ]);
        assert_eq!(showdown.winners(), vec![1]);
    }

    #[test]
    fn four_way_exact_tie() {
        // four seats, identical bust ranks in different suits
        let strengths = (0..4u8)
            .map(|s| strength([(s % 4, 0), ((s + 1) % 4, 1), (s % 4, 2), (s % 4, 3), (s % 4, 5)]))
            .collect::<Vec<_>>();
        let showdown = Showdown::from(strengths);
        assert_eq!(showdown.winners(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_showdown_has_no_winners() {
        let showdown = Showdown::from(Vec::new());
        assert!(showdown.best().is_none());
        assert!(showdown.winners().is_empty());
    }
}
