//! gnfd core: the permission policy model and its error surface.
//!
//! This crate defines the closed action/effect vocabulary, statements and
//! policies built from it, the `GnfdStatement` JSON wire format, and the
//! translation into the permission module's chain codes. It carries no
//! transport or runtime dependencies so it can be reused by any client.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GnfdError`/`Result` so a malformed
//! policy document can never crash the caller.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{ErrorCode, GnfdError, Result};
pub use policy::{
    Action, ChainAction, ChainEffect, Effect, Policy, PolicyBuilder, Statement, StatementBuilder,
};
