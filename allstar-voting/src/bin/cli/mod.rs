mod board;
mod players;

use color_eyre::Report;
use player_catalog::{CatalogConfig, PlayerCatalog};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Cli {
    #[structopt(flatten)]
    catalog: CatalogArgs,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Command {
    /// Query the players API
    Players(players::Players),
    /// Run an All-Star poll and print the standings as csv
    Board(board::Board),
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct CatalogArgs {
    /// Path to a json encoded `CatalogConfig`
    #[structopt(long)]
    config: Option<PathBuf>,

    /// Players API base url, overrides the config file
    #[structopt(long)]
    base_url: Option<String>,

    /// Value of the Authorization header sent to the players API
    #[structopt(long, env = "BALLDONTLIE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds, requests wait indefinitely when unset
    #[structopt(long)]
    timeout_secs: Option<u64>,
}

impl CatalogArgs {
    fn load(self) -> Result<CatalogConfig, Report> {
        let Self {
            config,
            base_url,
            api_key,
            timeout_secs,
        } = self;
        let mut config: CatalogConfig = match config {
            Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
            None => CatalogConfig::default(),
        };
        if let Some(base_url) = base_url {
            config.base_url = base_url;
        }
        if api_key.is_some() {
            config.api_key = api_key;
        }
        if timeout_secs.is_some() {
            config.timeout_secs = timeout_secs;
        }
        Ok(config)
    }
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        let catalog = PlayerCatalog::new(self.catalog.load()?)?;
        match self.command {
            Command::Players(players) => players.exec(&catalog),
            Command::Board(board) => board.exec(catalog),
        }
    }
}
