use anyhow::Result;
use std::path::Path;

use obra_core::config::ObraConfig;

pub async fn run(base_dir: &Path) -> Result<()> {
    let config_path = ObraConfig::default_path(base_dir);
    let config = ObraConfig::load(&config_path)?;

    obra_web::start_web_server(config).await
}
