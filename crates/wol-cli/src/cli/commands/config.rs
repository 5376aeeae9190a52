//! `wol-link config` – show where the config lives and what is in effect.

use anyhow::Result;
use wol_core::config::{self, WolConfig};

pub fn run_config(cfg: &WolConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
