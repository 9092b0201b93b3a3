use color_eyre::Report;
use player_catalog::{PlayerCatalog, PlayerId, DEFAULT_PER_PAGE};
use serde::Serialize;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Players {
    /// First page of the players listing
    List {
        /// Defaults to 25
        #[structopt(long)]
        per_page: Option<u32>,
    },
    /// A single player by id
    Get { id: PlayerId },
    /// Players matching a name
    Search {
        query: String,

        /// Defaults to 25
        #[structopt(long)]
        per_page: Option<u32>,
    },
    /// The built-in All-Star roster, no request is made
    AllStars,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Report> {
    serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    println!();
    Ok(())
}

impl Players {
    pub fn exec(self, catalog: &PlayerCatalog) -> Result<(), Report> {
        match self {
            Players::List { per_page } => {
                print_json(&catalog.players(per_page.unwrap_or(DEFAULT_PER_PAGE))?)
            }
            Players::Get { id } => print_json(&catalog.player(id)?),
            Players::Search { query, per_page } => {
                let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
                print_json(&catalog.search_players(&query, per_page)?)
            }
            Players::AllStars => print_json(&catalog.fallback_all_stars()),
        }
    }
}
