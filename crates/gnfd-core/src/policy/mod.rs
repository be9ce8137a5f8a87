//! Policy model (vocabulary, statements, policies, wire codec).
//!
//! - Vocabulary: the closed `Effect` set and the static action registry
//!   mapping each action tag to its permission-module chain code.
//! - Model: `Statement` and `Policy` values, validated at the boundary
//!   (builders and codec), never eagerly at construction.
//! - Wire: the `GnfdStatement` JSON document. Decoding only ever yields
//!   valid values; encoding refuses invalid ones without emitting bytes.

pub mod action;
pub mod builder;
pub mod codec;
pub mod effect;
pub mod statement;

pub use action::{Action, ActionScope, ChainAction};
pub use builder::{PolicyBuilder, StatementBuilder};
pub use codec::{decode_policy, decode_statement, encode_policy, encode_statement};
pub use effect::{ChainEffect, Effect};
pub use statement::{Policy, Statement};
