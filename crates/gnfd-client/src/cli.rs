//! `gnfd-policy` command line: arguments and the run pipeline.
//!
//! The binary only parses arguments, installs logging and prints; the
//! pipeline lives here so it can be driven from tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use gnfd_core::error::{GnfdError, Result};
use gnfd_core::policy::{decode_policy, encode_policy};

use crate::client::PermissionClient;
use crate::config;
use crate::dev::{LocalSubmitter, StaticSigner};
use crate::principal::Principal;
use crate::resource::Grn;
use crate::tx::TxHash;

#[derive(Debug, Parser)]
#[command(name = "gnfd-policy")]
#[command(version, about = "Validate a policy document and attach it on a local dev chain", long_about = None)]
pub struct Cli {
    /// Client config (YAML)
    pub config: PathBuf,

    /// Policy document (`{"GnfdStatement": [...]}`)
    pub policy: PathBuf,

    /// Resource the policy is attached to (e.g. `grn:b::photos`)
    pub grn: Grn,

    /// Grantee: an account address (`0x…`) or `group:<id>`
    pub principal: Principal,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Canonical JSON of the decoded policy.
    pub canonical: String,
    /// Hash of the put-policy tx on the local chain.
    pub tx_hash: TxHash,
}

/// Load config, decode the policy, attach it through the dev collaborators.
pub async fn run(cli: &Cli) -> Result<RunOutput> {
    let cfg = config::load_from_file(&cli.config)?;

    let raw = fs::read(&cli.policy).map_err(|e| {
        GnfdError::MalformedInput(format!("read {} failed: {e}", cli.policy.display()))
    })?;
    let policy = decode_policy(&raw)?;
    let canonical = String::from_utf8_lossy(&encode_policy(&policy)?).into_owned();

    let signer = Arc::new(StaticSigner::new(cfg.operator()?));
    let submitter = Arc::new(LocalSubmitter::new(cfg.chain.chain_id.clone()));
    let client = PermissionClient::new(cfg, signer, submitter)?;

    let tx_hash = client.put_policy(&cli.grn, &cli.principal, &policy, None).await?;
    tracing::info!(resource = %cli.grn, principal = %cli.principal, %tx_hash, "policy attached");

    Ok(RunOutput { canonical, tx_hash })
}
