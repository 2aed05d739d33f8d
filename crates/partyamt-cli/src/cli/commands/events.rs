//! Events command handler.
//!
//! Prints the same cards the dashboard shows, as plain text.

use std::io::{self, Write};

use anyhow::{Context, Result};
use partyamt_core::config::Config;
use partyamt_core::{EventCard, GraphQlClient, TagSet, filter_events, logging};

pub async fn run(config: &Config, endpoint: &str, tags: &[String]) -> Result<()> {
    logging::init_stderr()?;

    let events = GraphQlClient::new(endpoint)
        .fetch_events()
        .await
        .context("load events")?;
    let selected: TagSet = tags.iter().map(String::as_str).collect();
    let visible = filter_events(&events, &selected);

    if visible.is_empty() {
        if events.is_empty() {
            println!("No events.");
        } else {
            println!("No events match the selected tags.");
        }
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for (i, event) in visible.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let card =
            EventCard::with_currency(event, &config.sentinels, &config.display.currency_suffix);
        write_card(&mut out, &card)?;
    }
    Ok(())
}

fn write_card(out: &mut impl Write, card: &EventCard) -> io::Result<()> {
    let badge = if card.adults_only { "[18+] " } else { "" };
    writeln!(out, "{badge}{}", card.title)?;
    writeln!(out, "  {} @ {}", card.price, card.location_name)?;
    if !card.visible_tags.is_empty() {
        let tags: Vec<String> = card.visible_tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(out, "  {}", tags.join(" "))?;
    }
    if !card.url.is_empty() {
        writeln!(out, "  {}", card.url)?;
    }
    if !card.ics_link.is_empty() {
        writeln!(out, "  calendar: {}", card.ics_link)?;
    }
    Ok(())
}
