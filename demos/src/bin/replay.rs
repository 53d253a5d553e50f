use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circq_demos::{run, version, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::parse()
        .resolve()
        .context("could not load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!("{:#?}", &config);
    info!("{}", version());

    let report = run(&config).context("replay failed")?;
    if config.json {
        let out = serde_json::to_string_pretty(&report)
            .context("could not serialize report")?;
        println!("{}", out);
    }
    info!("replay finished");
    Ok(())
}
