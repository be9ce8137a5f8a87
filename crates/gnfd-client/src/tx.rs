//! Signing and submission capabilities and the values passed between them.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

use gnfd_core::error::Result;

use crate::msg::Msg;
use crate::principal::Address;

/// Opaque signature bytes produced by a [`Signer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// Transaction hash returned by a [`TxSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message with its sign bytes and signature, ready for submission.
#[derive(Debug, Clone)]
pub struct SignedTx {
    /// Chain the tx is bound to.
    pub chain_id: String,
    /// Message being submitted.
    pub msg: Msg,
    /// Exact bytes that were signed (`Msg::sign_bytes`).
    pub payload: Bytes,
    /// Operator that signed.
    pub signer: Address,
    /// Signature over `payload`.
    pub signature: Signature,
}

/// Signing capability. Key material never crosses this boundary.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Account the signatures belong to.
    fn address(&self) -> Address;
    /// Sign `payload` as-is.
    async fn sign(&self, payload: &[u8]) -> Result<Signature>;
}

/// Transaction submission capability (RPC, gRPC, or in-process).
#[async_trait]
pub trait TxSubmitter: Send + Sync {
    /// Broadcast a signed tx and return its hash once accepted.
    async fn submit(&self, tx: SignedTx) -> Result<TxHash>;
}
