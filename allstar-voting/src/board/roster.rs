use itertools::Itertools;
use player_catalog::{Player, PlayerId};
use std::collections::BTreeSet;
use std::fmt;

/// Position of a player in the loaded roster.
///
/// Player ids are not guaranteed to be unique (the fallback roster itself
/// repeats one), so votes are keyed by slot instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        let roster = Self { players };
        let duplicates = roster.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(
                ?duplicates,
                "roster contains repeated player ids, votes are tracked per slot"
            );
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, slot: Slot) -> Option<&Player> {
        self.players.get(slot.0)
    }

    pub fn contains(&self, slot: Slot) -> bool {
        slot.0 < self.players.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| (Slot(index), player))
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        (0..self.players.len()).map(Slot)
    }

    /// First slot holding a player with the given id.
    pub fn slot_of(&self, id: PlayerId) -> Option<Slot> {
        self.players.iter().position(|p| p.id == id).map(Slot)
    }

    pub fn duplicate_ids(&self) -> BTreeSet<PlayerId> {
        self.players
            .iter()
            .counts_by(|p| p.id)
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, _)| id)
            .collect()
    }
}
