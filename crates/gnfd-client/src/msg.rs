//! Permission-module messages.
//!
//! Messages carry chain codes only; policies are validated and translated
//! here, so an invalid policy can never reach the signer.

use bytes::Bytes;
use serde::Serialize;

use gnfd_core::error::{GnfdError, Result};
use gnfd_core::policy::{Policy, Statement};

use crate::principal::{Address, Principal};
use crate::resource::Grn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainStatement {
    pub effect: i32,
    pub actions: Vec<i32>,
}

impl ChainStatement {
    /// Translate a statement, checking each action against the resource.
    pub fn translate(stmt: &Statement, resource: &Grn) -> Result<Self> {
        let mut actions = Vec::with_capacity(stmt.actions.len());
        for a in stmt.chain_actions()? {
            if !resource.permits(a) {
                return Err(GnfdError::InvalidAction(format!(
                    "{a} does not apply to {resource}"
                )));
            }
            actions.push(a.code());
        }
        Ok(Self {
            effect: stmt.effect.to_chain_code().code(),
            actions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainPrincipal {
    #[serde(rename = "type")]
    pub kind: i32,
    pub value: String,
}

impl From<&Principal> for ChainPrincipal {
    fn from(p: &Principal) -> Self {
        Self { kind: p.chain_code(), value: p.chain_value() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgPutPolicy {
    pub operator: String,
    pub resource: String,
    pub principal: ChainPrincipal,
    pub statements: Vec<ChainStatement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u64>,
}

impl MsgPutPolicy {
    pub fn new(
        operator: &Address,
        resource: &Grn,
        principal: &Principal,
        policy: &Policy,
        expiration_time: Option<u64>,
    ) -> Result<Self> {
        policy.validate()?;
        let statements = policy
            .statements
            .iter()
            .map(|s| ChainStatement::translate(s, resource))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            operator: operator.to_string(),
            resource: resource.to_string(),
            principal: principal.into(),
            statements,
            expiration_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgDeletePolicy {
    pub operator: String,
    pub resource: String,
    pub principal: ChainPrincipal,
}

impl MsgDeletePolicy {
    pub fn new(operator: &Address, resource: &Grn, principal: &Principal) -> Self {
        Self {
            operator: operator.to_string(),
            resource: resource.to_string(),
            principal: principal.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Msg {
    #[serde(rename = "/greenfield.storage.MsgPutPolicy")]
    PutPolicy(MsgPutPolicy),
    #[serde(rename = "/greenfield.storage.MsgDeletePolicy")]
    DeletePolicy(MsgDeletePolicy),
}

impl Msg {
    pub fn type_url(&self) -> &'static str {
        match self {
            Msg::PutPolicy(_) => "/greenfield.storage.MsgPutPolicy",
            Msg::DeletePolicy(_) => "/greenfield.storage.MsgDeletePolicy",
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            Msg::PutPolicy(m) => &m.resource,
            Msg::DeletePolicy(m) => &m.resource,
        }
    }

    pub fn principal(&self) -> &ChainPrincipal {
        match self {
            Msg::PutPolicy(m) => &m.principal,
            Msg::DeletePolicy(m) => &m.principal,
        }
    }

    /// Bytes handed to the signer: the chain id followed by the JSON message.
    pub fn sign_bytes(&self, chain_id: &str) -> Result<Bytes> {
        #[derive(Serialize)]
        struct SignDoc<'a> {
            chain_id: &'a str,
            msg: &'a Msg,
        }
        serde_json::to_vec(&SignDoc { chain_id, msg: self })
            .map(Bytes::from)
            .map_err(|e| GnfdError::Internal(format!("encode sign doc failed: {e}")))
    }
}
