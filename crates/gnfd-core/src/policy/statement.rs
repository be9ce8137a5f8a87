//! Statements and policies (in-memory model).

use serde::Serialize;

use crate::error::Result;

use super::action::{Action, ChainAction};
use super::effect::Effect;

/// One effect applied to an ordered list of actions.
///
/// Duplicate actions are kept as written so a decoded statement encodes
/// back to the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// Grant or deny.
    #[serde(rename = "Effect")]
    pub effect: Effect,
    /// Action tags, as written (wire key `Action`).
    #[serde(rename = "Action")]
    pub actions: Vec<Action>,
}

impl Statement {
    /// Unchecked constructor; call [`Statement::validate`] before use.
    pub fn new(effect: Effect, actions: Vec<Action>) -> Self {
        Self { effect, actions }
    }

    /// Every action must be registered. Stops at the first unknown tag.
    pub fn validate(&self) -> Result<()> {
        self.actions.iter().try_for_each(Action::validate)
    }

    /// Chain codes of the actions, in statement order.
    pub fn chain_actions(&self) -> Result<Vec<ChainAction>> {
        self.actions.iter().map(Action::to_chain_code).collect()
    }
}

/// Ordered set of statements. Empty means "no grants" and is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Statements in document order (wire key `GnfdStatement`).
    #[serde(rename = "GnfdStatement")]
    pub statements: Vec<Statement>,
}

impl Policy {
    /// Unchecked constructor; call [`Policy::validate`] before use.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// True when the policy grants and denies nothing.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Fail-fast: the first invalid statement's error is returned.
    pub fn validate(&self) -> Result<()> {
        self.statements.iter().try_for_each(Statement::validate)
    }
}
