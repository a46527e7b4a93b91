//! Cromwell REST API contract types
//!
//! This crate defines the request and response types exchanged with the
//! Cromwell workflow engine. Status responses are fully typed; outputs and
//! metadata are kept as raw JSON and decoded only when asked for.

pub mod error;
pub mod raw;
pub mod types;

pub use error::*;
pub use raw::*;
pub use types::*;
