//! Generate a seeded registry and dump it as JSON.
//!
//! ```text
//! RUST_LOG=info cargo run --example seed_registry > population.json
//! ```

use anyhow::Result;
use sijil_core::{generate, GeneratorConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::seeded(42);
    let population = generate(&config)?;

    println!("{}", population.to_json()?);
    Ok(())
}
