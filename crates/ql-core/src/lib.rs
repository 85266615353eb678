//! quill/crates/ql-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Quill.

pub mod error;
pub mod models;
pub mod traits;
pub mod tree;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
pub use tree::*;
