//! gnfd permission client library entry.
//!
//! This crate wires the policy model into chain messages and hands them to
//! pluggable signing and submission capabilities. It is consumed by the
//! `gnfd-policy` binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cli;
pub mod client;
pub mod config;
pub mod dev;
pub mod msg;
pub mod principal;
pub mod resource;
pub mod tx;

pub use client::PermissionClient;
pub use principal::{Address, Principal};
pub use resource::Grn;
pub use tx::{Signature, SignedTx, Signer, TxHash, TxSubmitter};
