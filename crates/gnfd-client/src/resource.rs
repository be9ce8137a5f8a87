//! Greenfield resource names (GRN).
//!
//! Formats:
//! - bucket: `grn:b::<bucket>`
//! - object: `grn:o::<bucket>/<object>` (object names may contain `/`)
//! - group:  `grn:g:<owner>::<group>`
//!
//! Bucket names follow the chain's rules: 3 to 63 characters of lower-case
//! letters, digits and `-`, starting and ending with a letter or digit.

use std::fmt;
use std::str::FromStr;

use gnfd_core::error::{GnfdError, Result};
use gnfd_core::policy::{ActionScope, ChainAction};

use crate::principal::Address;

/// A bucket, object or group a policy can be attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grn {
    Bucket { bucket: String },
    Object { bucket: String, object: String },
    Group { owner: Address, group: String },
}

impl Grn {
    /// Unchecked constructors; parsing (`FromStr`) enforces naming rules.
    pub fn bucket(bucket: impl Into<String>) -> Self {
        Grn::Bucket { bucket: bucket.into() }
    }

    pub fn object(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Grn::Object { bucket: bucket.into(), object: object.into() }
    }

    pub fn group(owner: Address, group: impl Into<String>) -> Self {
        Grn::Group { owner, group: group.into() }
    }

    /// Whether a policy on this resource may name `action`.
    /// Bucket policies also cover the objects inside the bucket.
    pub fn permits(&self, action: ChainAction) -> bool {
        match (self, action.scope()) {
            (Grn::Bucket { .. }, ActionScope::Bucket | ActionScope::Object) => true,
            (Grn::Object { .. }, ActionScope::Object) => true,
            (Grn::Group { .. }, ActionScope::Group) => true,
            _ => false,
        }
    }
}

fn invalid(s: &str, why: &str) -> GnfdError {
    GnfdError::InvalidResource(format!("{s}: {why}"))
}

/// Check a bucket name against the chain's naming rules.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    let ok_len = (3..=63).contains(&name.len());
    let ok_chars = name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    let ok_edges = !name.starts_with('-') && !name.ends_with('-');
    if ok_len && ok_chars && ok_edges {
        Ok(())
    } else {
        Err(GnfdError::InvalidResource(format!("bad bucket name: {name:?}")))
    }
}

impl FromStr for Grn {
    type Err = GnfdError;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s.strip_prefix("grn:").ok_or_else(|| invalid(s, "missing grn: prefix"))?;
        let (kind, rest) = rest.split_once(':').ok_or_else(|| invalid(s, "missing resource type"))?;

        match kind {
            "b" => {
                let bucket = rest.strip_prefix(':').ok_or_else(|| invalid(s, "expected grn:b::<bucket>"))?;
                validate_bucket_name(bucket).map_err(|_| invalid(s, "bad bucket name"))?;
                Ok(Grn::bucket(bucket))
            }
            "o" => {
                let path = rest
                    .strip_prefix(':')
                    .ok_or_else(|| invalid(s, "expected grn:o::<bucket>/<object>"))?;
                let (bucket, object) = path
                    .split_once('/')
                    .ok_or_else(|| invalid(s, "expected grn:o::<bucket>/<object>"))?;
                validate_bucket_name(bucket).map_err(|_| invalid(s, "bad bucket name"))?;
                if object.is_empty() {
                    return Err(invalid(s, "object name must not be empty"));
                }
                Ok(Grn::object(bucket, object))
            }
            "g" => {
                let (owner, group) = rest
                    .split_once("::")
                    .ok_or_else(|| invalid(s, "expected grn:g:<owner>::<group>"))?;
                if group.is_empty() {
                    return Err(invalid(s, "group name must not be empty"));
                }
                let owner: Address = owner.parse().map_err(|_| invalid(s, "bad group owner"))?;
                Ok(Grn::group(owner, group))
            }
            other => Err(invalid(s, &format!("unknown resource type {other:?}"))),
        }
    }
}

impl fmt::Display for Grn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grn::Bucket { bucket } => write!(f, "grn:b::{bucket}"),
            Grn::Object { bucket, object } => write!(f, "grn:o::{bucket}/{object}"),
            Grn::Group { owner, group } => write!(f, "grn:g:{owner}::{group}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for s in [
            "grn:b::photos",
            "grn:o::photos/2024/cat.png",
            "grn:g:0x4e9c8fe8f4bbd1fe1fa23bcb7c5bc9a72b7b0bd4::editors",
        ] {
            let g: Grn = s.parse().unwrap();
            assert_eq!(g.to_string(), s);
        }
        assert_eq!(
            "grn:o::photos/2024/cat.png".parse::<Grn>().unwrap(),
            Grn::object("photos", "2024/cat.png")
        );
    }

    #[test]
    fn rejects_malformed() {
        for s in [
            "photos",
            "grn:b:photos",
            "grn:b::",
            "grn:o::photos",
            "grn:o::/cat.png",
            "grn:g:nobody::editors",
            "grn:g:0x4e9c8fe8f4bbd1fe1fa23bcb7c5bc9a72b7b0bd4::",
            "grn:x::thing",
            "grn:b:::x",
            "grn:b::Photos",
            "grn:b::my photos",
            "grn:b::ab",
            "grn:b::-photos",
            "grn:b::photos-",
            "grn:o::Photos/cat.png",
            "grn:o::ph:otos/cat.png",
        ] {
            let err = s.parse::<Grn>().unwrap_err();
            assert_eq!(err.code().as_str(), "INVALID_RESOURCE", "input={s}");
        }
    }

    #[test]
    fn bucket_name_rules() {
        assert!(validate_bucket_name("abc").is_ok());
        assert!(validate_bucket_name("my-bucket-2024").is_ok());
        assert!(validate_bucket_name(&"a".repeat(63)).is_ok());
        assert!(validate_bucket_name(&"a".repeat(64)).is_err());
        assert!(validate_bucket_name("a.b").is_err());
    }

    #[test]
    fn action_compatibility() {
        let bucket = Grn::bucket("b");
        let object = Grn::object("b", "o");
        assert!(bucket.permits(ChainAction::DeleteBucket));
        assert!(bucket.permits(ChainAction::GetObject));
        assert!(!bucket.permits(ChainAction::DeleteGroup));
        assert!(object.permits(ChainAction::GetObject));
        assert!(!object.permits(ChainAction::UpdateBucketInfo));
    }
}
