use std::path::Path;

use anyhow::Result;

use showdeck_core::Deck;

pub fn run(path: &Path) -> Result<()> {
    let deck = Deck::load(path)?;

    println!("Deck: {}", deck.title);
    if !deck.tagline.is_empty() {
        println!("  {}", deck.tagline);
    }
    println!("  Hero stats: {}", deck.hero_stats.len());
    println!("  Case studies: {}", deck.case_studies.len());
    for case in &deck.case_studies {
        println!("    {} ({} metrics)", case.client, case.metrics.len());
    }
    println!("OK");
    Ok(())
}
