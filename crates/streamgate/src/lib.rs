//! Top-level facade crate for streamgate.
//!
//! Re-exports core types and the policy library so users can depend on a single crate.

pub mod core {
    pub use streamgate_core::*;
}

pub mod policy {
    pub use streamgate_policy::*;
}
