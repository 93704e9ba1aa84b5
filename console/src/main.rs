//! Community Console
//!
//! Generates a community dataset and answers queries over it: the command
//! surface the admin screens would call.

use anyhow::Context;
use clap::{Parser, Subcommand};
use community_console::{commands, state::AppState};
use generator::{generate, CommunityConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "community-console", about = "Query console over a synthesized community")]
struct Cli {
    /// Generation seed; omitted means a fresh dataset every run
    #[arg(long)]
    seed: Option<u32>,

    /// Override the resident cap
    #[arg(long)]
    max_residents: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and print a population summary
    Generate,
    /// List residents, one resident by id, or residents of one building
    Residents {
        #[arg(long)]
        id: Option<u64>,
        #[arg(long)]
        building: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// List households, one household by id, or a household's members
    Households {
        #[arg(long)]
        id: Option<u64>,
        #[arg(long)]
        members: bool,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Demographic statistics
    Stats,
    /// Dump the full dataset as JSON
    Dump,
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing output")?
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut config = CommunityConfig::default();
    if let Some(cap) = cli.max_residents {
        config.max_residents = cap;
    }
    let seed = cli.seed.unwrap_or_else(rand::random);

    let data = generate(&config, seed).context("generating community dataset")?;
    let app = AppState::from_dataset(config, seed, data);

    match cli.command {
        Command::Generate => print_json(&commands::stats::population_summary(&app)),
        Command::Residents { id, building, limit } => match (id, building) {
            (Some(id), _) => match commands::residents::get_resident(&app, id) {
                Some(row) => print_json(&row),
                None => anyhow::bail!("no resident with id {id}"),
            },
            (None, Some(building)) => {
                print_json(&commands::residents::residents_by_building(&app, &building, limit))
            }
            (None, None) => print_json(&commands::residents::list_residents(&app, limit)),
        },
        Command::Households { id, members, limit } => match id {
            Some(id) if members => print_json(&commands::households::household_members(&app, id)),
            Some(id) => match commands::households::get_household(&app, id) {
                Some(row) => print_json(&row),
                None => anyhow::bail!("no household with id {id}"),
            },
            None => print_json(&commands::households::list_households(&app, limit)),
        },
        Command::Stats => print_json(&commands::stats::demographics(&app)),
        Command::Dump => print_json(&app.dataset()),
    }
}
