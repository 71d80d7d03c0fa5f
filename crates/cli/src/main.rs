use clap::{Parser, Subcommand};
use log::LevelFilter;
mod commands;
mod render;

#[derive(Parser)]
#[command(name = "ivg-strutture")]
#[command(about = "Browse the facilities performing IVG procedures, by province")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    source: commands::DataSource,

    #[command(subcommand)]
    subcommand: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the provinces present in the dataset
    Provinces(commands::provinces::Args),
    /// Show the facilities of a province, ordered by name
    Show(commands::show::Args),
    /// Pick provinces interactively from standard input
    Browse(commands::browse::Args),
}

#[tokio::main]
async fn main() -> anyhow::Result<commands::ExitCode> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    Ok(match cli.subcommand {
        Commands::Provinces(args) => commands::provinces::main(&cli.source, args).await?,
        Commands::Show(args) => commands::show::main(&cli.source, args).await?,
        Commands::Browse(args) => commands::browse::main(&cli.source, args).await?,
    })
}
