//! In-process collaborators for local runs and tests.
//!
//! `StaticSigner` signs with ed25519 over a fixed, publicly known dev seed:
//! signatures are real but the key is not secret. `LocalSubmitter` keeps an
//! in-memory ledger and applies policy messages to an in-memory table.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};

use gnfd_core::error::{GnfdError, Result};

use crate::msg::{ChainStatement, Msg};
use crate::principal::Address;
use crate::tx::{Signature, SignedTx, Signer, TxHash, TxSubmitter};

/// Seed of the development key. Public; never use it for real funds.
pub const DEV_SEED: [u8; 32] = [7u8; 32];

/// Deterministic ed25519 signer for development.
pub struct StaticSigner {
    address: Address,
    key: SigningKey,
}

impl StaticSigner {
    /// Sign as `address` with the [`DEV_SEED`] key.
    pub fn new(address: Address) -> Self {
        Self::with_seed(address, DEV_SEED)
    }

    pub fn with_seed(address: Address, seed: [u8; 32]) -> Self {
        Self { address, key: SigningKey::from_bytes(&seed) }
    }

    /// Public half of the signing key, for verifying produced signatures.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

#[async_trait]
impl Signer for StaticSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign(&self, payload: &[u8]) -> Result<Signature> {
        Ok(Signature(self.key.sign(payload).to_bytes().to_vec()))
    }
}

/// Key of an attached policy: (resource GRN, principal type, principal value).
type PolicyKey = (String, i32, String);

/// In-memory ledger standing in for a chain node.
///
/// The ledger is unbounded: every committed tx is kept for the lifetime of
/// the submitter.
pub struct LocalSubmitter {
    chain_id: String,
    next: AtomicU64,
    ledger: DashMap<TxHash, SignedTx>,
    policies: DashMap<PolicyKey, Vec<ChainStatement>>,
}

impl LocalSubmitter {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            next: AtomicU64::new(1),
            ledger: DashMap::new(),
            policies: DashMap::new(),
        }
    }

    pub fn tx(&self, hash: &TxHash) -> Option<SignedTx> {
        self.ledger.get(hash).map(|e| e.value().clone())
    }

    pub fn tx_count(&self) -> usize {
        self.ledger.len()
    }

    /// Statements currently attached to `resource` for the principal.
    pub fn policy(
        &self,
        resource: &str,
        principal_type: i32,
        principal_value: &str,
    ) -> Option<Vec<ChainStatement>> {
        let key = (resource.to_string(), principal_type, principal_value.to_string());
        self.policies.get(&key).map(|e| e.value().clone())
    }

    fn apply(&self, msg: &Msg) -> Result<()> {
        let p = msg.principal();
        let key = (msg.resource().to_string(), p.kind, p.value.clone());
        match msg {
            Msg::PutPolicy(m) => {
                self.policies.insert(key, m.statements.clone());
            }
            Msg::DeletePolicy(_) => {
                if self.policies.remove(&key).is_none() {
                    return Err(GnfdError::Submission(format!(
                        "no policy on {} for principal {}",
                        msg.resource(),
                        p.value
                    )));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TxSubmitter for LocalSubmitter {
    async fn submit(&self, tx: SignedTx) -> Result<TxHash> {
        if tx.chain_id != self.chain_id {
            return Err(GnfdError::Submission(format!(
                "chain id mismatch: tx={} node={}",
                tx.chain_id, self.chain_id
            )));
        }
        if tx.signature.0.is_empty() {
            return Err(GnfdError::Submission("missing signature".into()));
        }

        self.apply(&tx.msg)?;

        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let hash = TxHash(format!("{n:064x}"));
        tracing::debug!(tx_hash = %hash, msg = tx.msg.type_url(), "local tx committed");
        self.ledger.insert(hash.clone(), tx);
        Ok(hash)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use ed25519_dalek::Verifier;

    fn addr() -> Address {
        "0x4e9c8fe8f4bbd1fe1fa23bcb7c5bc9a72b7b0bd4".parse().unwrap()
    }

    fn dalek_sig(sig: &Signature) -> ed25519_dalek::Signature {
        let raw: [u8; 64] = sig.0.as_slice().try_into().unwrap();
        ed25519_dalek::Signature::from_bytes(&raw)
    }

    #[tokio::test]
    async fn static_signer_produces_verifiable_signatures() {
        let s = StaticSigner::new(addr());
        let a = s.sign(b"payload").await.unwrap();
        let b = s.sign(b"payload").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.0.len(), 64);

        let vk = s.verifying_key();
        assert!(vk.verify(b"payload", &dalek_sig(&a)).is_ok());
        assert!(vk.verify(b"other", &dalek_sig(&a)).is_err());
    }

    #[tokio::test]
    async fn different_seeds_do_not_verify() {
        let dev = StaticSigner::new(addr());
        let other = StaticSigner::with_seed(addr(), [9u8; 32]);
        let sig = other.sign(b"payload").await.unwrap();
        assert!(dev.verifying_key().verify(b"payload", &dalek_sig(&sig)).is_err());
    }

    #[tokio::test]
    async fn tx_hashes_are_lower_case_hex() {
        let ledger = LocalSubmitter::new("c");
        let s = StaticSigner::new(addr());
        let msg = Msg::DeletePolicy(crate::msg::MsgDeletePolicy {
            operator: addr().to_string(),
            resource: "grn:b::photos".into(),
            principal: crate::msg::ChainPrincipal { kind: 2, value: "1".into() },
        });
        ledger.policies.insert(("grn:b::photos".into(), 2, "1".into()), vec![]);
        let payload = msg.sign_bytes("c").unwrap();
        let tx = SignedTx {
            chain_id: "c".into(),
            signature: s.sign(&payload).await.unwrap(),
            msg,
            payload,
            signer: addr(),
        };
        let hash = ledger.submit(tx).await.unwrap();
        assert_eq!(hash.0.len(), 64);
        assert_eq!(hash.0, hash.0.to_lowercase());
        assert!(hash.0.ends_with('1'));
    }
}
