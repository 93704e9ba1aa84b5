//! Community Generator Demo
//!
//! Standalone run of the generation engine with summary output.

use generator::{generate, CommunityConfig, MaritalStatus};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Community generation engine starting...");

    let config = CommunityConfig::default();
    let seed = 2025;

    let start = std::time::Instant::now();
    let data = generate(&config, seed)?;
    let elapsed = start.elapsed();

    let minors = data.residents.iter().filter(|r| r.age < 18).count();
    let seniors = data.residents.iter().filter(|r| r.age >= 60).count();
    let married = data
        .residents
        .iter()
        .filter(|r| r.marital_status == MaritalStatus::Married)
        .count();

    info!(
        "Generated {} residents / {} households / {} buildings in {:?}",
        data.residents.len(),
        data.households.len(),
        data.buildings.len(),
        elapsed
    );
    info!(
        "Demographics: {} minors, {} seniors, {} married",
        minors, seniors, married
    );

    Ok(())
}
