use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use snapdeck_core::deck::UnresolvedLink;
use snapdeck_core::Deck;

#[derive(Serialize)]
struct SectionSummary<'a> {
    index: usize,
    id: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    title: &'a str,
    sections: Vec<SectionSummary<'a>>,
    unresolved_links: Vec<UnresolvedLink>,
}

pub fn run(path: &Path, json: bool) -> Result<()> {
    let deck = Deck::load(path).with_context(|| format!("invalid deck {}", path.display()))?;

    let report = CheckReport {
        title: &deck.title,
        sections: deck
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionSummary {
                index,
                id: &section.id,
                title: &section.title,
            })
            .collect(),
        unresolved_links: deck.unresolved_links(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !report.title.is_empty() {
        println!("{}", report.title);
    }
    println!("{} sections:", report.sections.len());
    for section in &report.sections {
        println!("  {:>3}  #{:<20} {}", section.index, section.id, section.title);
    }

    if report.unresolved_links.is_empty() {
        println!("All links resolve.");
    } else {
        println!("{} unresolved links:", report.unresolved_links.len());
        for link in &report.unresolved_links {
            println!("  {} -> {}", link.label, link.href);
        }
    }

    Ok(())
}
