use anyhow::Context;
use sprite_tools::{OUTPUT_DIR, SOURCE_PATH};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    sprite_tools::run(Path::new(SOURCE_PATH), Path::new(OUTPUT_DIR))
        .context("Failed to split the animal sprite sheet")?;

    println!("Splitting complete.");

    Ok(())
}
