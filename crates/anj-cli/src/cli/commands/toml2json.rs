//! `toml2json` – export the catalog as JSON.

use anyhow::Result;
use anj_core::convert;
use std::path::Path;

pub fn run_toml2json(input: &Path, output: &Path) -> Result<()> {
    convert::convert_file(input, output)?;
    println!("Generated {}", output.display());
    Ok(())
}
