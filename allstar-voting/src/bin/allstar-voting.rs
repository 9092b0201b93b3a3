mod cli;

use color_eyre::Report;
use structopt::StructOpt;

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allstar_voting=info,player_catalog=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::Cli::from_args().exec()
}
