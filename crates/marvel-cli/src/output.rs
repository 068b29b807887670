//! Output formatting helpers.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use marvel_core::{Character, ResourceList, ResultEnvelope, StorySummary, Summary};

const RULE: &str = "---------------------------------------------";
const ITEM: &str = "··· ··· ···";

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a follow-up suggestion under an error.
pub fn hint(msg: &str) {
    eprintln!("  {}", msg.dimmed());
}

/// Write a labeled field.
pub fn field(w: &mut impl Write, label: &str, value: impl std::fmt::Display) -> Result<()> {
    writeln!(w, "{} {}", format!("{:<14}", format!("{}:", label)).dimmed(), value)?;
    Ok(())
}

/// Write a value as compact JSON on its own line.
pub fn json<T: Serialize>(w: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Write every record of `envelope`, as text blocks or JSON lines.
pub fn envelope(w: &mut impl Write, envelope: &ResultEnvelope, as_json: bool) -> Result<()> {
    if envelope.results().is_empty() {
        eprintln!("{}", "No characters found.".dimmed());
        return Ok(());
    }

    for (index, character) in envelope.results().iter().enumerate() {
        if as_json {
            json(w, character)?;
        } else {
            character_block(w, index + 1, character)?;
        }
    }

    if !as_json && !envelope.attribution_text.is_empty() {
        writeln!(w, "{}", envelope.attribution_text.dimmed())?;
    }

    Ok(())
}

/// Write one numbered character as a text block.
pub fn character_block(w: &mut impl Write, number: usize, character: &Character) -> Result<()> {
    field(w, "Number", number)?;
    field(w, "ID", character.id)?;
    field(w, "Name", &character.name)?;
    field(w, "Description", &character.description)?;
    field(w, "Modified", modified(character))?;
    field(w, "Resource URI", &character.resource_uri)?;

    heading(w, "URLS")?;
    for link in &character.urls {
        writeln!(w, "{}", ITEM)?;
        field(w, "Type", &link.kind)?;
        field(w, "URL", &link.url)?;
    }

    summaries(w, "COMICS", &character.comics)?;
    stories(w, &character.stories)?;
    summaries(w, "EVENTS", &character.events)?;
    summaries(w, "SERIES", &character.series)?;

    writeln!(w, "{}", RULE)?;
    writeln!(w, "Result #{}", number)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w)?;
    Ok(())
}

/// The raw date plus its interpretation, or just the raw date when it
/// does not parse.
fn modified(character: &Character) -> String {
    if character.modified.is_empty() {
        return String::new();
    }
    match character.modified.parse() {
        Ok(date) => format!(
            "{} ({})",
            character.modified,
            date.format("%Y-%m-%d %H:%M:%S %:z")
        ),
        Err(e) => {
            warn!(id = character.id, error = %e, "unreadable modified date");
            character.modified.to_string()
        }
    }
}

fn heading(w: &mut impl Write, title: &str) -> Result<()> {
    writeln!(w, "{}", RULE)?;
    writeln!(w, "{:^45}", title.bold())?;
    writeln!(w, "{}", RULE)?;
    Ok(())
}

fn list_header<T>(w: &mut impl Write, title: &str, list: &ResourceList<T>) -> Result<()> {
    heading(w, title)?;
    field(w, "Available", list.available)?;
    field(w, "Returned", list.returned)?;
    field(w, "Collection URI", &list.collection_uri)?;
    Ok(())
}

fn summaries(w: &mut impl Write, title: &str, list: &ResourceList<Summary>) -> Result<()> {
    list_header(w, title, list)?;
    for item in &list.items {
        writeln!(w, "{}", ITEM)?;
        field(w, "Name", &item.name)?;
        field(w, "Resource URI", &item.resource_uri)?;
    }
    Ok(())
}

fn stories(w: &mut impl Write, list: &ResourceList<StorySummary>) -> Result<()> {
    list_header(w, "STORIES", list)?;
    for item in &list.items {
        writeln!(w, "{}", ITEM)?;
        field(w, "Name", &item.name)?;
        field(w, "Type", &item.kind)?;
        field(w, "Resource URI", &item.resource_uri)?;
    }
    Ok(())
}
