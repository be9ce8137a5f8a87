//! Permission client: validate, build, sign, submit.
//!
//! Every check that can fail locally (policy vocabulary, statement limit,
//! resource/action compatibility) runs before the signer is called, so a
//! request the chain would reject never costs a round-trip.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use gnfd_core::error::{GnfdError, Result};
use gnfd_core::policy::Policy;

use crate::config::ClientConfig;
use crate::msg::{Msg, MsgDeletePolicy, MsgPutPolicy};
use crate::principal::{Address, Principal};
use crate::resource::Grn;
use crate::tx::{SignedTx, Signer, TxHash, TxSubmitter};

#[derive(Clone)]
pub struct PermissionClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    cfg: ClientConfig,
    operator: Address,
    signer: Arc<dyn Signer>,
    submitter: Arc<dyn TxSubmitter>,
}

impl PermissionClient {
    /// The signer must sign as the configured operator.
    pub fn new(
        cfg: ClientConfig,
        signer: Arc<dyn Signer>,
        submitter: Arc<dyn TxSubmitter>,
    ) -> Result<Self> {
        cfg.validate()?;
        let operator = cfg.operator()?;
        if signer.address() != operator {
            return Err(GnfdError::Signing(format!(
                "signer address {} does not match operator {operator}",
                signer.address()
            )));
        }

        tracing::info!(chain_id = %cfg.chain.chain_id, %operator, "permission client ready");
        Ok(Self {
            inner: Arc::new(ClientInner { cfg, operator, signer, submitter }),
        })
    }

    pub fn cfg(&self) -> &ClientConfig {
        &self.inner.cfg
    }

    pub fn operator(&self) -> Address {
        self.inner.operator
    }

    /// Attach `policy` to `resource` for `principal`.
    ///
    /// `expiration_time` is an absolute unix timestamp; `None` falls back to
    /// `permission.default_expiration_secs` from now (0 = no expiry).
    pub async fn put_policy(
        &self,
        resource: &Grn,
        principal: &Principal,
        policy: &Policy,
        expiration_time: Option<u64>,
    ) -> Result<TxHash> {
        let max = self.inner.cfg.permission.max_statements;
        if policy.statements.len() > max {
            return Err(GnfdError::MalformedInput(format!(
                "policy has {} statements, limit is {max}",
                policy.statements.len()
            )));
        }

        let expiration_time = match expiration_time {
            Some(t) => Some(t),
            None => self.default_expiration()?,
        };

        let msg = MsgPutPolicy::new(&self.inner.operator, resource, principal, policy, expiration_time)
            .inspect_err(|e| {
                tracing::warn!(%resource, %principal, code = e.code().as_str(), error = %e, "put_policy rejected");
            })?;

        tracing::debug!(%resource, %principal, statements = msg.statements.len(), "put_policy built");
        self.sign_and_submit(Msg::PutPolicy(msg)).await
    }

    /// Detach whatever policy `principal` holds on `resource`.
    pub async fn delete_policy(&self, resource: &Grn, principal: &Principal) -> Result<TxHash> {
        let msg = MsgDeletePolicy::new(&self.inner.operator, resource, principal);
        self.sign_and_submit(Msg::DeletePolicy(msg)).await
    }

    fn default_expiration(&self) -> Result<Option<u64>> {
        let secs = self.inner.cfg.permission.default_expiration_secs;
        if secs == 0 {
            return Ok(None);
        }
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GnfdError::Internal(format!("system clock before epoch: {e}")))?
            .as_secs();
        Ok(Some(now.saturating_add(secs)))
    }

    async fn sign_and_submit(&self, msg: Msg) -> Result<TxHash> {
        let chain_id = self.inner.cfg.chain.chain_id.clone();
        let payload = msg.sign_bytes(&chain_id)?;
        let signature = self.inner.signer.sign(&payload).await?;

        let type_url = msg.type_url();
        let tx = SignedTx {
            chain_id,
            msg,
            payload,
            signer: self.inner.operator,
            signature,
        };

        match self.inner.submitter.submit(tx).await {
            Ok(hash) => {
                tracing::info!(tx_hash = %hash, msg = type_url, "tx submitted");
                Ok(hash)
            }
            Err(e) => {
                tracing::warn!(msg = type_url, error = %e, "tx submission failed");
                Err(e)
            }
        }
    }
}
