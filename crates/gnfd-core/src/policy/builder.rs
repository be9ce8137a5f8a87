//! Construct-then-validate builders.
//!
//! Builders hold raw strings and accept anything; `build()` is the single
//! point where the vocabulary is enforced.

use crate::error::{GnfdError, Result};

use super::statement::{Policy, Statement};

/// Collects one statement's raw effect and action tags.
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    effect: Option<String>,
    actions: Vec<String>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the effect string; anything but `Allow`/`Deny` fails at build.
    pub fn effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Shorthand for `effect("Allow")`.
    pub fn allow(self) -> Self {
        self.effect("Allow")
    }

    /// Shorthand for `effect("Deny")`.
    pub fn deny(self) -> Self {
        self.effect("Deny")
    }

    /// Append one action tag.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Append several action tags in order.
    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    /// A missing effect is reported as an empty, invalid effect.
    pub fn build(self) -> Result<Statement> {
        let effect = self.effect.unwrap_or_default();
        Statement::parse(&effect, self.actions)
    }
}

/// Collects statement builders for a policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    statements: Vec<StatementBuilder>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    pub fn statement(mut self, s: StatementBuilder) -> Self {
        self.statements.push(s);
        self
    }

    /// Replace the statement at `idx`; out of range is an error, not a panic.
    pub fn replace(mut self, idx: usize, s: StatementBuilder) -> Result<Self> {
        let slot = self.statements.get_mut(idx).ok_or_else(|| {
            GnfdError::MalformedInput(format!("no statement at index {idx}"))
        })?;
        *slot = s;
        Ok(self)
    }

    /// Number of statements collected so far.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Fail-fast on the first invalid statement.
    pub fn build(self) -> Result<Policy> {
        let statements = self
            .statements
            .into_iter()
            .map(StatementBuilder::build)
            .collect::<Result<Vec<_>>>()?;
        Ok(Policy::new(statements))
    }
}
