//! Lazily decoded JSON payloads
//!
//! Outputs and metadata responses can be large and loosely structured, so they
//! are kept as the raw response bytes. Decoding happens only when the caller
//! asks for a parsed or rendered view, and a malformed payload never fails
//! the request that fetched it.

use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::error::{ApiContractError, ApiContractResult};

/// Decoded JSON object keyed by field name
pub type JsonObject = Map<String, Value>;

/// A workflow response body kept as raw JSON
pub trait RawPayload {
    /// Workflow the payload belongs to
    fn id(&self) -> &str;

    /// Response body exactly as received
    fn raw_bytes(&self) -> &[u8];

    /// Decode the payload into a string-keyed map
    fn parse(&self) -> ApiContractResult<JsonObject> {
        Ok(serde_json::from_slice(self.raw_bytes())?)
    }

    /// Decode the payload and render it with two-space indentation
    fn to_pretty_string(&self) -> ApiContractResult<String> {
        let object = self.parse()?;
        Ok(serde_json::to_string_pretty(&object)?)
    }

    /// Write the raw payload to `path` without decoding it
    fn write_to(&self, path: &Path) -> ApiContractResult<()> {
        std::fs::write(path, self.raw_bytes()).map_err(|source| ApiContractError::Export {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Workflow identifier paired with an undecoded JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWorkflowJson {
    id: String,
    body: Vec<u8>,
}

impl RawWorkflowJson {
    pub fn new(id: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }

    /// Best-effort rendering: a decode failure becomes the message itself.
    fn render(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        match self.to_pretty_string() {
            Ok(pretty) => write!(f, "{} for {}:\n{}", label, self.id, pretty),
            Err(e) => write!(f, "{} for {}: {}", label, self.id, e),
        }
    }
}

impl RawPayload for RawWorkflowJson {
    fn id(&self) -> &str {
        &self.id
    }

    fn raw_bytes(&self) -> &[u8] {
        &self.body
    }
}

/// Output values of a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutputs(pub RawWorkflowJson);

/// Execution metadata of a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowMetadata(pub RawWorkflowJson);

macro_rules! raw_payload_wrapper {
    ($name:ident, $label:literal) => {
        impl $name {
            pub fn new(id: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
                Self(RawWorkflowJson::new(id, body))
            }
        }

        impl RawPayload for $name {
            fn id(&self) -> &str {
                self.0.id()
            }

            fn raw_bytes(&self) -> &[u8] {
                self.0.raw_bytes()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.render(f, $label)
            }
        }
    };
}

raw_payload_wrapper!(WorkflowOutputs, "outputs");
raw_payload_wrapper!(WorkflowMetadata, "metadata");
