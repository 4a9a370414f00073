use anyhow::Result;
use std::path::Path;

use obra_core::config::ObraConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    println!("Initializing obra in {}", base_dir.display());

    std::fs::create_dir_all(base_dir)?;

    let config_path = ObraConfig::default_path(base_dir);
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
    } else {
        let config = ObraConfig::default();
        config.save(&config_path)?;
        println!("Created config: {}", config_path.display());
    }

    println!("\nobra initialized. Next steps:");
    println!("  1. Adjust {} if the defaults do not fit", config_path.display());
    println!("  2. Run `obra serve` to start the gate server");

    Ok(())
}
