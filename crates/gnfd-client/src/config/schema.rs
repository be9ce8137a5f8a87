//! Client config schema with defaults and range validation.

use serde::Deserialize;

use gnfd_core::error::{GnfdError, Result};

use crate::principal::Address;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Schema version; only `1` is accepted.
    pub version: u32,

    pub chain: ChainSection,

    pub account: AccountSection,

    #[serde(default)]
    pub permission: PermissionSection,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GnfdError::UnsupportedVersion);
        }

        self.chain.validate()?;
        self.account.validate()?;
        self.permission.validate()?;

        Ok(())
    }

    /// Operator address the client signs as.
    pub fn operator(&self) -> Result<Address> {
        self.account.address.parse().map_err(|e| {
            GnfdError::InvalidConfig(format!("account.address: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSection {
    /// Chain id bound into every sign doc.
    pub chain_id: String,

    #[serde(default = "default_rpc_addr")]
    pub rpc_addr: String,

    #[serde(default = "default_grpc_addr")]
    pub grpc_addr: String,
}

impl ChainSection {
    pub fn validate(&self) -> Result<()> {
        if self.chain_id.trim().is_empty() {
            return Err(GnfdError::InvalidConfig("chain.chain_id must not be empty".into()));
        }
        if self.rpc_addr.trim().is_empty() || self.grpc_addr.trim().is_empty() {
            return Err(GnfdError::InvalidConfig(
                "chain.rpc_addr and chain.grpc_addr must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_rpc_addr() -> String {
    "https://greenfield-chain.bnbchain.org:443".into()
}
fn default_grpc_addr() -> String {
    "grpc.greenfield.bnbchain.org:9090".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSection {
    /// Operator address (`0x` + 40 hex).
    pub address: String,
}

impl AccountSection {
    pub fn validate(&self) -> Result<()> {
        self.address
            .parse::<Address>()
            .map(|_| ())
            .map_err(|e| GnfdError::InvalidConfig(format!("account.address: {e}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionSection {
    /// Relative expiry applied when a call passes none. 0 = never expires.
    #[serde(default)]
    pub default_expiration_secs: u64,

    /// Upper bound on statements per put-policy request.
    #[serde(default = "default_max_statements")]
    pub max_statements: usize,
}

impl Default for PermissionSection {
    fn default() -> Self {
        Self {
            default_expiration_secs: 0,
            max_statements: default_max_statements(),
        }
    }
}

impl PermissionSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.max_statements) {
            return Err(GnfdError::InvalidConfig(
                "permission.max_statements must be between 1 and 64".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_statements() -> usize {
    16
}
