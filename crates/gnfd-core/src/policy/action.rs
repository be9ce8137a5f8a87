//! Action registry.
//!
//! The registry is a closed, compile-time table: `ChainAction` enumerates
//! every recognized action with its permission-module code, and tag lookup
//! is a `match` over static strings. Nothing here is mutable at runtime, so
//! the table is freely shared across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GnfdError, Result};

/// Permission-module action code (`ActionType` on chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ChainAction {
    UpdateBucketInfo = 1,
    DeleteBucket = 2,
    CreateObject = 3,
    DeleteObject = 4,
    CopyObject = 5,
    GetObject = 6,
    ExecuteObject = 7,
    ListObject = 8,
    UpdateGroupMember = 9,
    DeleteGroup = 10,
}

/// Resource family an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionScope {
    /// Bucket metadata and lifecycle.
    Bucket,
    /// Objects inside a bucket.
    Object,
    /// Group membership and lifecycle.
    Group,
}

impl ChainAction {
    /// Every registered action, in chain-code order.
    pub const ALL: [ChainAction; 10] = [
        ChainAction::UpdateBucketInfo,
        ChainAction::DeleteBucket,
        ChainAction::CreateObject,
        ChainAction::DeleteObject,
        ChainAction::CopyObject,
        ChainAction::GetObject,
        ChainAction::ExecuteObject,
        ChainAction::ListObject,
        ChainAction::UpdateGroupMember,
        ChainAction::DeleteGroup,
    ];

    /// Numeric code understood by the permission module.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Wire tag used in policy documents.
    pub fn tag(self) -> &'static str {
        match self {
            ChainAction::UpdateBucketInfo => "update-bucket-info",
            ChainAction::DeleteBucket => "delete-bucket",
            ChainAction::CreateObject => "create-object",
            ChainAction::DeleteObject => "delete-object",
            ChainAction::CopyObject => "copy-object",
            ChainAction::GetObject => "get-object",
            ChainAction::ExecuteObject => "execute-object",
            ChainAction::ListObject => "list-object",
            ChainAction::UpdateGroupMember => "update-group-member",
            ChainAction::DeleteGroup => "delete-group",
        }
    }

    /// Registry lookup by wire tag. Exact, case-sensitive match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let a = match tag {
            "update-bucket-info" => ChainAction::UpdateBucketInfo,
            "delete-bucket" => ChainAction::DeleteBucket,
            "create-object" => ChainAction::CreateObject,
            "delete-object" => ChainAction::DeleteObject,
            "copy-object" => ChainAction::CopyObject,
            "get-object" => ChainAction::GetObject,
            "execute-object" => ChainAction::ExecuteObject,
            "list-object" => ChainAction::ListObject,
            "update-group-member" => ChainAction::UpdateGroupMember,
            "delete-group" => ChainAction::DeleteGroup,
            _ => return None,
        };
        Some(a)
    }

    /// Reverse lookup from a chain code (0 is "unspecified" and never valid).
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    /// Resource family this action operates on.
    pub fn scope(self) -> ActionScope {
        match self {
            ChainAction::UpdateBucketInfo | ChainAction::DeleteBucket => ActionScope::Bucket,
            ChainAction::UpdateGroupMember | ChainAction::DeleteGroup => ActionScope::Group,
            _ => ActionScope::Object,
        }
    }
}

impl fmt::Display for ChainAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An action tag as written by the caller.
///
/// Construction never checks the registry; a tag is only proven registered
/// by [`Action::validate`] or [`Action::to_chain_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// Wrap a tag without consulting the registry.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Registry membership, without building an error.
    pub fn is_registered(&self) -> bool {
        ChainAction::from_tag(&self.0).is_some()
    }

    /// Registry membership check for the validation path.
    pub fn validate(&self) -> Result<()> {
        if self.is_registered() {
            Ok(())
        } else {
            Err(GnfdError::InvalidAction(self.0.clone()))
        }
    }

    /// Translate to the permission module's action code.
    pub fn to_chain_code(&self) -> Result<ChainAction> {
        ChainAction::from_tag(&self.0).ok_or_else(|| GnfdError::UnregisteredAction(self.0.clone()))
    }
}

impl From<ChainAction> for Action {
    fn from(a: ChainAction) -> Self {
        Self(a.tag().to_string())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_codes_agree() {
        for a in ChainAction::ALL {
            assert_eq!(ChainAction::from_tag(a.tag()), Some(a));
            assert_eq!(ChainAction::from_code(a.code()), Some(a));
        }
        assert_eq!(ChainAction::from_code(0), None);
        assert_eq!(ChainAction::GetObject.code(), 6);
        assert_eq!(ChainAction::DeleteGroup.code(), 10);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(ChainAction::from_tag("Get-Object").is_none());
        assert!(ChainAction::from_tag(" get-object").is_none());
        assert!(ChainAction::from_tag("").is_none());
    }

    #[test]
    fn unregistered_action_reports_both_paths() {
        let a = Action::new("teleport-object");
        assert_eq!(a.validate().unwrap_err(), GnfdError::InvalidAction("teleport-object".into()));
        assert_eq!(
            a.to_chain_code().unwrap_err(),
            GnfdError::UnregisteredAction("teleport-object".into())
        );
    }

    #[test]
    fn scopes() {
        assert_eq!(ChainAction::DeleteBucket.scope(), ActionScope::Bucket);
        assert_eq!(ChainAction::ListObject.scope(), ActionScope::Object);
        assert_eq!(ChainAction::UpdateGroupMember.scope(), ActionScope::Group);
    }
}
