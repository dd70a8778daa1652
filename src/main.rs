use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use truckdex::{config::Config, domain::TruckIndex};

fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── load the permit export ──────────────────────────────────────
    let config = Config::from_env()?;
    let index = TruckIndex::load(&config.csv_path)?;
    info!(trucks = index.len(), "collection ready");

    // With an argument, run a name search; otherwise print the reports.
    if let Some(query) = std::env::args().nth(1) {
        let hits = index.search_by_name(&query);
        info!(query = %query, hits = hits.len(), "name search");
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&index.report_by_type())?);
    println!("{}", serde_json::to_string_pretty(&index.report_by_status())?);
    Ok(())
}
