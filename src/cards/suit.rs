/// A card's suit as a 0-based ordinal within the active ruleset.
///
/// The standard deck has four (clubs through spades), the widget deck seven
/// colours. Suits never rank hands; equality is all that matters here.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suit(u8);

impl Suit {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::from(6);
        assert!(suit == Suit::from(u8::from(suit)));
    }
}
