//! `GnfdStatement` JSON codec.
//!
//! Decoding is two-step: parse into string-typed wire structs (so an
//! unknown effect surfaces as `InvalidEffect`, not as a parse error), then
//! convert and validate. Encoding validates before serializing.

use bytes::Bytes;
use serde::Deserialize;

use crate::error::{GnfdError, Result};

use super::action::Action;
use super::effect::Effect;
use super::statement::{Policy, Statement};

/// Statement as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireStatement {
    #[serde(rename = "Effect")]
    effect: String,
    #[serde(rename = "Action")]
    actions: Vec<String>,
}

/// Policy document as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WirePolicy {
    #[serde(rename = "GnfdStatement")]
    statements: Vec<WireStatement>,
}

impl TryFrom<WireStatement> for Statement {
    type Error = GnfdError;

    fn try_from(w: WireStatement) -> Result<Self> {
        Statement::parse(&w.effect, w.actions)
    }
}

impl TryFrom<WirePolicy> for Policy {
    type Error = GnfdError;

    fn try_from(w: WirePolicy) -> Result<Self> {
        let statements = w
            .statements
            .into_iter()
            .map(Statement::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Policy::new(statements))
    }
}

impl Statement {
    /// Build a statement from raw strings, validating effect then actions.
    pub fn parse<I, S>(effect: &str, actions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let effect: Effect = effect.parse()?;
        let s = Statement::new(effect, actions.into_iter().map(Action::new).collect());
        s.validate()?;
        Ok(s)
    }
}

fn to_bytes<T: serde::Serialize>(v: &T) -> Result<Bytes> {
    serde_json::to_vec(v)
        .map(Bytes::from)
        .map_err(|e| GnfdError::Internal(format!("encode failed: {e}")))
}

/// Encode a policy. Invalid policies produce an error and no bytes.
pub fn encode_policy(p: &Policy) -> Result<Bytes> {
    p.validate()?;
    to_bytes(p)
}

/// Encode a single statement.
pub fn encode_statement(s: &Statement) -> Result<Bytes> {
    s.validate()?;
    to_bytes(s)
}

/// Decode and validate a policy document.
pub fn decode_policy(buf: &[u8]) -> Result<Policy> {
    let wire: WirePolicy = serde_json::from_slice(buf)
        .map_err(|e| GnfdError::MalformedInput(format!("invalid policy json: {e}")))?;
    Policy::try_from(wire).inspect_err(|e| {
        tracing::debug!(code = e.code().as_str(), error = %e, "policy rejected");
    })
}

/// Decode and validate a single statement document.
pub fn decode_statement(buf: &[u8]) -> Result<Statement> {
    let wire: WireStatement = serde_json::from_slice(buf)
        .map_err(|e| GnfdError::MalformedInput(format!("invalid statement json: {e}")))?;
    Statement::try_from(wire).inspect_err(|e| {
        tracing::debug!(code = e.code().as_str(), error = %e, "statement rejected");
    })
}
