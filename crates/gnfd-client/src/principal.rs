//! Accounts and principals.

use std::fmt;
use std::str::FromStr;

use gnfd_core::error::{GnfdError, Result};

/// 20-byte account address, rendered as lower-case `0x` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub fn from_bytes(b: [u8; 20]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = GnfdError;

    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| GnfdError::InvalidPrincipal(format!("address must start with 0x: {s}")))?;
        if body.len() != 40 {
            return Err(GnfdError::InvalidPrincipal(format!(
                "address must have 40 hex digits: {s}"
            )));
        }
        let mut out = [0u8; 20];
        hex::decode_to_slice(body, &mut out)
            .map_err(|e| GnfdError::InvalidPrincipal(format!("invalid address {s}: {e}")))?;
        Ok(Self(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Who a policy is attached to.
///
/// Text form: an account address (`0x…`) or `group:<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    Account(Address),
    Group(u64),
}

impl Principal {
    /// Permission-module principal type code.
    pub fn chain_code(&self) -> i32 {
        match self {
            Principal::Account(_) => 1,
            Principal::Group(_) => 2,
        }
    }

    /// Value carried next to the type code on chain.
    pub fn chain_value(&self) -> String {
        match self {
            Principal::Account(a) => a.to_string(),
            Principal::Group(id) => id.to_string(),
        }
    }
}

impl FromStr for Principal {
    type Err = GnfdError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(id) = s.strip_prefix("group:") {
            let id = id
                .parse()
                .map_err(|_| GnfdError::InvalidPrincipal(format!("invalid group id: {id}")))?;
            return Ok(Principal::Group(id));
        }
        Ok(Principal::Account(s.parse()?))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Account(a) => write!(f, "{a}"),
            Principal::Group(id) => write!(f, "group:{id}"),
        }
    }
}
