//! Command-line lookup against the Clearbit enrichment API.
//!
//! Usage: `clearbit-lookup <person|combined> <email>`
//!
//! Reads `CLEARBIT_KEY` (required), `CLEARBIT_BASE_URL` and
//! `CLEARBIT_TIMEOUT_SECS` from the environment or a `.env` file.

use anyhow::{bail, Context};
use clearbit_client::ClientConfig;
use std::env;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the client configuration from environment variables.
fn config_from_env() -> anyhow::Result<ClientConfig> {
    let api_key = env::var("CLEARBIT_KEY")
        .map_err(|_| anyhow::anyhow!("CLEARBIT_KEY environment variable required"))
        .and_then(|key| {
            if key.trim().is_empty() {
                bail!("CLEARBIT_KEY cannot be empty");
            }
            Ok(key)
        })?;

    let mut config = ClientConfig::new(api_key);

    if let Some(base_url) = env::var("CLEARBIT_BASE_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
    {
        config = config.with_base_url(base_url);
    }

    if let Ok(secs) = env::var("CLEARBIT_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .map_err(|_| anyhow::anyhow!("CLEARBIT_TIMEOUT_SECS must be a whole number of seconds"))?;
        config = config.with_timeout(Duration::from_secs(secs));
    }

    config.validate().context("invalid Clearbit configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clearbit_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (mode, email) = match args.as_slice() {
        [mode, email] => (mode.as_str(), email.as_str()),
        _ => bail!("usage: clearbit-lookup <person|combined> <email>"),
    };

    let client = config_from_env()?.build()?;
    let enrichment = client.enrichment();

    tracing::info!("Looking up {} ({})", email, mode);

    let output = match mode {
        "person" => {
            let person = enrichment
                .get_person(email)
                .await
                .with_context(|| format!("person lookup failed for {}", email))?;
            serde_json::to_string_pretty(&person)?
        }
        "combined" => {
            let result = enrichment
                .get_combined(email)
                .await
                .with_context(|| format!("combined lookup failed for {}", email))?;
            serde_json::to_string_pretty(&result)?
        }
        other => bail!("unknown lookup '{}', expected 'person' or 'combined'", other),
    };

    println!("{}", output);
    Ok(())
}
