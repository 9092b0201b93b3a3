mod roster;
mod tally;

use crate::notify::Notifier;
use crate::wallet::WalletState;
use player_catalog::{Player, PlayerCatalog};
use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;

pub use roster::{Roster, Slot};
pub use tally::{VoteCount, VoteTally, SEED_VOTES_MAX, SEED_VOTES_MIN};

pub const CONNECT_TO_VOTE: &str = "Please connect your wallet to vote!";

#[derive(Debug, Error)]
pub enum Error {
    #[error("no player at slot {slot}, roster has {roster_len} players")]
    UnknownSlot { slot: Slot, roster_len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unconnected,
    Connected,
}

impl Phase {
    pub fn vote_label(self) -> &'static str {
        match self {
            Phase::Connected => "Vote for Player",
            Phase::Unconnected => "Connect Wallet to Vote",
        }
    }

    /// Banner shown above the roster, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Phase::Connected => None,
            Phase::Unconnected => Some("Please connect your wallet to enable voting"),
        }
    }

    pub fn how_to_vote(self) -> &'static str {
        match self {
            Phase::Connected => {
                "Click \"Vote for Player\" button or use Solana Action for blockchain voting!"
            }
            Phase::Unconnected => "Connect your wallet first to enable voting!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was added, carrying the new count for the slot.
    Counted(VoteCount),
    /// No wallet connected: the user was notified and nothing changed.
    Rejected,
}

/// What a single roster card shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Standing<'a> {
    pub slot: Slot,
    pub player: &'a Player,
    pub votes: VoteCount,
    pub percentage: Decimal,
}

/// In-memory All-Star poll.
///
/// The board never connects a wallet itself, it only reads `wallet` when a
/// vote comes in. All derived figures are computed from the tally on every
/// call.
pub struct VotingBoard<W, N> {
    catalog: PlayerCatalog,
    wallet: W,
    notifier: N,
    roster: Roster,
    tally: VoteTally,
}

impl<W: WalletState, N: Notifier> VotingBoard<W, N> {
    pub fn new(catalog: PlayerCatalog, wallet: W, notifier: N) -> Self {
        Self {
            catalog,
            wallet,
            notifier,
            roster: Roster::default(),
            tally: VoteTally::default(),
        }
    }

    pub fn catalog(&self) -> &PlayerCatalog {
        &self.catalog
    }

    /// Load the fallback All-Stars and seed their counts.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let players = self.catalog.fallback_all_stars();
        self.load_roster(players, rng);
    }

    /// Replace the roster, discarding every count of the previous one.
    pub fn load_roster<R: Rng + ?Sized>(&mut self, players: Vec<Player>, rng: &mut R) {
        let roster = Roster::new(players);
        self.tally = VoteTally::seeded(&roster, rng);
        self.roster = roster;
        tracing::info!(
            players = self.roster.len(),
            total_votes = self.tally.total(),
            "roster loaded"
        );
    }

    pub fn phase(&self) -> Phase {
        if self.wallet.is_connected() {
            Phase::Connected
        } else {
            Phase::Unconnected
        }
    }

    pub fn cast_vote(&mut self, slot: Slot) -> Result<VoteOutcome, Error> {
        if self.phase() == Phase::Unconnected {
            self.notifier.notify(CONNECT_TO_VOTE);
            return Ok(VoteOutcome::Rejected);
        }
        if !self.roster.contains(slot) {
            return Err(Error::UnknownSlot {
                slot,
                roster_len: self.roster.len(),
            });
        }
        let votes = self.tally.increment(slot);
        tracing::debug!(%slot, votes, "vote counted");
        Ok(VoteOutcome::Counted(votes))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub fn votes(&self, slot: Slot) -> VoteCount {
        self.tally.get(slot)
    }

    pub fn total_votes(&self) -> VoteCount {
        self.tally.total()
    }

    pub fn vote_percentage(&self, slot: Slot) -> Decimal {
        self.tally.percentage(slot)
    }

    pub fn standings(&self) -> Vec<Standing<'_>> {
        self.roster
            .iter()
            .map(|(slot, player)| self.standing(slot, player))
            .collect()
    }

    /// The first player in roster order holding the highest positive count.
    pub fn leading_player(&self) -> Option<Standing<'_>> {
        let mut leader = None;
        let mut max_votes = 0;
        for (slot, player) in self.roster.iter() {
            let votes = self.tally.get(slot);
            if votes > max_votes {
                max_votes = votes;
                leader = Some((slot, player));
            }
        }
        leader.map(|(slot, player)| self.standing(slot, player))
    }

    fn standing<'a>(&'a self, slot: Slot, player: &'a Player) -> Standing<'a> {
        Standing {
            slot,
            player,
            votes: self.tally.get(slot),
            percentage: self.tally.percentage(slot),
        }
    }
}
