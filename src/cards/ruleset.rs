use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// Which family of deck and scoring rules is in play.
///
/// One evaluator serves both variants; every variant-specific behavior is a
/// question answered here rather than a recompiled constant. Each variant
/// reaches exactly ten of the eleven categories: the standard deck cannot
/// make five of a kind, and the widget deck has no royal distinction.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Ruleset {
    /// 4 suits x 13 ranks. The ace plays high or low, and the ace-high
    /// straight flush is its own top category.
    #[default]
    Standard,
    /// 7 colours x 9 ranks. No ace equivalent, so no wheel and no royal;
    /// seven copies of each rank make five of a kind reachable.
    Widget,
}

const STANDARD_RANKS: [&str; 13] = [
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack", "queen",
    "king", "ace",
];
const STANDARD_SUITS: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];

const WIDGET_RANKS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const WIDGET_SUITS: [&str; 7] = ["red", "blue", "green", "yellow", "black", "pink", "white"];

impl Ruleset {
    pub const fn n_ranks(self) -> u8 {
        match self {
            Ruleset::Standard => 13,
            Ruleset::Widget => 9,
        }
    }
    pub const fn n_suits(self) -> u8 {
        match self {
            Ruleset::Standard => 4,
            Ruleset::Widget => 7,
        }
    }
    pub const fn deck_size(self) -> usize {
        self.n_suits() as usize * self.n_ranks() as usize
    }

    /// Whether the top rank may also play below the lowest rank in a
    /// straight (the wheel).
    pub const fn has_wheel(self) -> bool {
        matches!(self, Ruleset::Standard)
    }
    /// Whether the top-anchored straight flush is a distinct category.
    pub const fn has_royal(self) -> bool {
        matches!(self, Ruleset::Standard)
    }
    /// Whether five of a kind is reachable. Needs at least five suits.
    pub const fn has_quints(self) -> bool {
        self.n_suits() >= 5
    }

    pub fn top_rank(self) -> Rank {
        Rank::from(self.n_ranks() - 1)
    }
    pub fn ranks(self) -> impl Iterator<Item = Rank> {
        (0..self.n_ranks()).map(Rank::from)
    }
    pub fn suits(self) -> impl Iterator<Item = Suit> {
        (0..self.n_suits()).map(Suit::from)
    }

    /// The ten categories this ruleset can produce, weakest first.
    pub fn rankings(self) -> [Ranking; 10] {
        match self {
            Ruleset::Standard => [
                Ranking::Bust,
                Ranking::OnePair,
                Ranking::TwoPair,
                Ranking::ThreeOAK,
                Ranking::Straight,
                Ranking::Flush,
                Ranking::FullHouse,
                Ranking::FourOAK,
                Ranking::StraightFlush,
                Ranking::RoyalFlush,
            ],
            Ruleset::Widget => [
                Ranking::Bust,
                Ranking::OnePair,
                Ranking::TwoPair,
                Ranking::ThreeOAK,
                Ranking::Straight,
                Ranking::Flush,
                Ranking::FullHouse,
                Ranking::FourOAK,
                Ranking::FiveOAK,
                Ranking::StraightFlush,
            ],
        }
    }

    pub fn rank_name(self, rank: Rank) -> &'static str {
        match self {
            Ruleset::Standard => STANDARD_RANKS[rank.index()],
            Ruleset::Widget => WIDGET_RANKS[rank.index()],
        }
    }
    pub fn suit_name(self, suit: Suit) -> &'static str {
        match self {
            Ruleset::Standard => STANDARD_SUITS[suit.index()],
            Ruleset::Widget => WIDGET_SUITS[suit.index()],
        }
    }
}

/// str isomorphism, for CLI parsing
impl std::str::FromStr for Ruleset {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poker" | "standard" => Ok(Ruleset::Standard),
            "widget" => Ok(Ruleset::Widget),
            _ => Err(format!("unknown ruleset: {}", s)),
        }
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ruleset::Standard => write!(f, "poker"),
            Ruleset::Widget => write!(f, "widget"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_sizes() {
        assert_eq!(Ruleset::Standard.deck_size(), 52);
        assert_eq!(Ruleset::Widget.deck_size(), 63);
    }

    #[test]
    fn variant_flags() {
        assert!(Ruleset::Standard.has_wheel());
        assert!(Ruleset::Standard.has_royal());
        assert!(!Ruleset::Standard.has_quints());
        assert!(!Ruleset::Widget.has_wheel());
        assert!(!Ruleset::Widget.has_royal());
        assert!(Ruleset::Widget.has_quints());
    }

    #[test]
    fn rankings_ascend() {
        for ruleset in [Ruleset::Standard, Ruleset::Widget] {
            let rankings = ruleset.rankings();
            assert!(rankings.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn rankings_reachable() {
        assert!(!Ruleset::Standard.rankings().contains(&Ranking::FiveOAK));
        assert!(!Ruleset::Widget.rankings().contains(&Ranking::RoyalFlush));
    }

    #[test]
    fn bijective_str() {
        for ruleset in [Ruleset::Standard, Ruleset::Widget] {
            assert_eq!(ruleset.to_string().parse::<Ruleset>(), Ok(ruleset));
        }
        assert!("bridge".parse::<Ruleset>().is_err());
    }

    #[test]
    fn name_tables() {
        assert_eq!(Ruleset::Standard.rank_name(Ruleset::Standard.top_rank()), "ace");
        assert_eq!(Ruleset::Widget.rank_name(Ruleset::Widget.top_rank()), "nine");
        assert_eq!(Ruleset::Widget.suit_name(Suit::from(6)), "white");
    }
}
