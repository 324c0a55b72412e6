use super::hand::HAND_SIZE;
use super::rank::Rank;
use arrayvec::ArrayVec;

/// A hand's tie-break ranks, most significant first.
///
/// Comparison is lexicographic, so two same-category hands order by the
/// first position where their lists differ. The list leads with the
/// category's defining ranks (quad before its kicker, higher pair before
/// lower pair before the single) followed by the leftover singles in
/// descending order. Fixed capacity: a five-card hand never needs more
/// than five entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Kickers(ArrayVec<Rank, HAND_SIZE>);

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl FromIterator<Rank> for Kickers {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Vec<Rank> isomorphism
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        ranks.into_iter().collect()
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.0.to_vec()
    }
}
