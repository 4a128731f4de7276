use std::path::Path;

use anyhow::{bail, Context, Result};

use snapdeck_core::Deck;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Deck::sample()
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote sample deck to {}", path.display());
    println!("Present it with: snapdeck {}", path.display());
    Ok(())
}
