use super::roster::{Roster, Slot};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub type VoteCount = u64;

/// Bounds of the placeholder counts a freshly loaded roster starts with.
pub const SEED_VOTES_MIN: VoteCount = 20;
pub const SEED_VOTES_MAX: VoteCount = 120;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteTally(BTreeMap<Slot, VoteCount>);

impl VoteTally {
    /// One independent draw in `[SEED_VOTES_MIN, SEED_VOTES_MAX)` per roster slot.
    pub fn seeded<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        roster
            .slots()
            .map(|slot| (slot, rng.gen_range(SEED_VOTES_MIN..SEED_VOTES_MAX)))
            .collect()
    }

    /// Missing entries count as zero.
    pub fn get(&self, slot: Slot) -> VoteCount {
        self.0.get(&slot).copied().unwrap_or_default()
    }

    pub(crate) fn increment(&mut self, slot: Slot) -> VoteCount {
        let entry = self.0.entry(slot).or_default();
        *entry += 1;
        *entry
    }

    pub fn total(&self) -> VoteCount {
        self.0.values().sum()
    }

    /// Share of `slot` over all votes, in percent. Zero while nobody has voted.
    pub fn percentage(&self, slot: Slot) -> Decimal {
        let total = self.total();
        if total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.get(slot)) / Decimal::from(total) * Decimal::from(100)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, VoteCount)> + '_ {
        self.0.iter().map(|(slot, votes)| (*slot, *votes))
    }
}

impl FromIterator<(Slot, VoteCount)> for VoteTally {
    fn from_iter<I: IntoIterator<Item = (Slot, VoteCount)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
