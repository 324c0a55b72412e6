/// A hand's ranking category.
///
/// The derived ordering is the unified precedence for both rulesets; kicker
/// lists break ties within a category. Standard play never produces
/// FiveOAK and widget play never produces RoyalFlush, so each ruleset sees
/// exactly ten of the eleven variants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ranking {
    Bust,          // 5 kickers
    OnePair,       // 4 kickers
    TwoPair,       // 3 kickers
    ThreeOAK,      // 3 kickers
    Straight,      // 1 kicker
    Flush,         // 5 kickers
    FullHouse,     // 2 kickers
    FourOAK,       // 2 kickers
    FiveOAK,       // 1 kicker
    StraightFlush, // 1 kicker
    RoyalFlush,    // 0 kickers
}

impl Ranking {
    /// Total number of category variants across both rulesets.
    pub const COUNT: usize = 11;

    /// How many ranks the kicker list carries for this category.
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::Bust | Ranking::Flush => 5,
            Ranking::OnePair => 4,
            Ranking::TwoPair | Ranking::ThreeOAK => 3,
            Ranking::FullHouse | Ranking::FourOAK => 2,
            Ranking::Straight | Ranking::FiveOAK | Ranking::StraightFlush => 1,
            Ranking::RoyalFlush => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Ranking::Bust => "Bust",
            Ranking::OnePair => "One pair",
            Ranking::TwoPair => "Two pair",
            Ranking::ThreeOAK => "Three of a kind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "Full house",
            Ranking::FourOAK => "Four of a kind",
            Ranking::FiveOAK => "Five of a kind",
            Ranking::StraightFlush => "Straight Flush",
            Ranking::RoyalFlush => "Royal Flush",
        })
    }
}
