use std::path::Path;

use anyhow::{bail, Result};

use showdeck_core::Deck;

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let deck = Deck::sample();
    let content = toml::to_string_pretty(&deck)?;
    std::fs::write(path, content)?;
    println!("Wrote sample deck to {}", path.display());
    Ok(())
}
