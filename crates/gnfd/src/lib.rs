//! Top-level facade crate for the Greenfield permission SDK.
//!
//! Re-exports the policy model and the permission client so users can depend on a single crate.

pub mod core {
    pub use gnfd_core::*;
}

pub mod client {
    pub use gnfd_client::*;
}
