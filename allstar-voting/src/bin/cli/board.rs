use allstar_voting::board::{Slot, Standing, VoteOutcome, VotingBoard};
use allstar_voting::notify::LogNotifier;
use allstar_voting::wallet::WalletSignal;
use color_eyre::Report;
use player_catalog::{PlayerCatalog, DEFAULT_PER_PAGE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Board {
    /// Seed for the initial vote counts, random when unset
    #[structopt(long)]
    seed: Option<u64>,

    /// Public key of the connected wallet. Votes are rejected without one
    #[structopt(long)]
    wallet: Option<String>,

    /// Roster slot to vote for, can be repeated
    #[structopt(long = "vote")]
    votes: Vec<usize>,

    /// Use the first page of the players API instead of the built-in All-Stars
    #[structopt(long)]
    from_api: bool,

    /// Page size when `--from-api` is set, defaults to 25
    #[structopt(long)]
    per_page: Option<u32>,
}

fn write_standings(standings: &[Standing<'_>]) -> Result<(), Report> {
    let header = ["Slot", "Player", "Team", "Votes", "Percentage"];
    let mut csv_writer = csv::Writer::from_writer(std::io::stdout().lock());
    csv_writer.write_record(&header)?;

    for standing in standings {
        let record = [
            standing.slot.to_string(),
            standing.player.full_name(),
            standing.player.team.full_name.clone(),
            standing.votes.to_string(),
            standing.percentage.round_dp(1).to_string(),
        ];
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

impl Board {
    pub fn exec(self, catalog: PlayerCatalog) -> Result<(), Report> {
        let Board {
            seed,
            wallet,
            votes,
            from_api,
            per_page,
        } = self;

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let signal = WalletSignal::default();
        if let Some(key) = wallet {
            signal.connect(key);
        }

        let mut board = VotingBoard::new(catalog, signal, LogNotifier);
        if from_api {
            let page = board
                .catalog()
                .players(per_page.unwrap_or(DEFAULT_PER_PAGE))?;
            board.load_roster(page.data, &mut rng);
        } else {
            board.initialize(&mut rng);
        }

        if let Some(banner) = board.phase().banner() {
            eprintln!("{}", banner);
        }
        let mut rejected = 0;
        for slot in votes {
            if board.cast_vote(Slot::new(slot))? == VoteOutcome::Rejected {
                rejected += 1;
            }
        }
        if rejected > 0 {
            tracing::info!(rejected, "votes rejected");
        }

        write_standings(&board.standings())?;

        match board.leading_player() {
            Some(leader) => eprintln!(
                "Leading player: {} #{} {} ({} votes, {}% of {})",
                leader.player.full_name(),
                leader.player.jersey_number,
                leader.player.team.full_name,
                leader.votes,
                leader.percentage.round_dp(1),
                board.total_votes()
            ),
            None => eprintln!("No votes cast yet"),
        }
        eprintln!("{}", board.phase().how_to_vote());
        Ok(())
    }
}
