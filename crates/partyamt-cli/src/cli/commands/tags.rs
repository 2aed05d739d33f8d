//! Tags command handler.

use anyhow::{Context, Result};
use partyamt_core::{GraphQlClient, logging, sort_catalog};

pub async fn run(endpoint: &str) -> Result<()> {
    logging::init_stderr()?;

    let tags = GraphQlClient::new(endpoint)
        .fetch_tags()
        .await
        .context("load tag catalog")?;

    for tag in sort_catalog(tags) {
        println!("{tag}");
    }
    Ok(())
}
