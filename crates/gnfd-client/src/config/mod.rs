//! Client config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use gnfd_core::error::{GnfdError, Result};

pub use schema::{AccountSection, ChainSection, ClientConfig, PermissionSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        GnfdError::InvalidConfig(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig = serde_yaml::from_str(s)
        .map_err(|e| GnfdError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(chain_id = %cfg.chain.chain_id, operator = %cfg.account.address, "config loaded");
    Ok(cfg)
}
