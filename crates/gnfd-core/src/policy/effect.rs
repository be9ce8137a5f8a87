//! Statement effects and their chain codes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{GnfdError, Result};

/// Whether a statement grants or denies its actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Grant the listed actions.
    Allow,
    /// Refuse the listed actions, overriding grants.
    Deny,
}

/// Permission-module effect code. `0` (unspecified) is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ChainEffect {
    Allow = 1,
    Deny = 2,
}

impl ChainEffect {
    /// Numeric code understood by the permission module.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Effect {
    /// Wire spelling (`"Allow"` / `"Deny"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }

    /// Total mapping; the value set is closed by the enum itself.
    pub fn to_chain_code(self) -> ChainEffect {
        match self {
            Effect::Allow => ChainEffect::Allow,
            Effect::Deny => ChainEffect::Deny,
        }
    }
}

impl FromStr for Effect {
    type Err = GnfdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Allow" => Ok(Effect::Allow),
            "Deny" => Ok(Effect::Deny),
            other => Err(GnfdError::InvalidEffect(other.to_string())),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Effect {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!("Allow".parse::<Effect>().unwrap(), Effect::Allow);
        assert_eq!("Deny".parse::<Effect>().unwrap(), Effect::Deny);
    }

    #[test]
    fn parse_rejects_everything_else() {
        for s in ["Maybe", "allow", "DENY", "", " Allow", "Allow "] {
            let err = s.parse::<Effect>().unwrap_err();
            assert_eq!(err, GnfdError::InvalidEffect(s.to_string()));
        }
    }

    #[test]
    fn chain_codes() {
        assert_eq!(Effect::Allow.to_chain_code().code(), 1);
        assert_eq!(Effect::Deny.to_chain_code().code(), 2);
    }
}
