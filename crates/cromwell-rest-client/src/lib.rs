//! REST API client for the Cromwell workflow engine
//!
//! This crate wraps the engine's workflow endpoints: submitting a workflow as
//! a multipart upload, querying status, outputs and metadata, aborting a
//! running workflow, and reading the engine version.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod submit;

pub use client::*;
pub use error::*;

pub use cromwell_api_contract as contract;
