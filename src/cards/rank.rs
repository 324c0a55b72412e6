/// A card's rank as a 0-based ordinal within the active ruleset.
///
/// Ordinal 0 is the weakest rank ("two" in the standard deck, "one" in the
/// widget deck); the ruleset's name table gives ordinals their display
/// names. Ordering follows the ordinal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::from(5);
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn ordinal_ordering() {
        assert!(Rank::from(3) < Rank::from(11));
        assert!(Rank::from(0) < Rank::from(1));
    }
}
