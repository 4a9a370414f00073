use anyhow::Result;
use std::path::Path;

use obra_core::config::ObraConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    let config_path = ObraConfig::default_path(base_dir);
    let config = ObraConfig::load(&config_path)?;

    println!("Config: {}", config_path.display());
    println!();
    println!("  Listen addr:        {}", config.web.listen_addr);
    println!("  Login path:         {}", config.gate.login_path);
    println!("  Unauthorized path:  {}", config.gate.unauthorized_path);
    println!("  Public paths:       {}", config.gate.public_paths.join(", "));
    println!(
        "  Guarded prefixes:   {}",
        config.gate.guarded_prefixes.join(", ")
    );
    println!(
        "  Cookies:            {} / {} / {}",
        config.gate.access_cookie, config.gate.refresh_cookie, config.gate.permissions_cookie
    );

    Ok(())
}
