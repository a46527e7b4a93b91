//! Typed request and response values for the Cromwell REST service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Workflow submission request
///
/// Each path names a local file that is uploaded as one part of the
/// multipart submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCommand {
    pub wdl_source: PathBuf,
    pub workflow_inputs: Option<PathBuf>,
    pub workflow_options: Option<PathBuf>,
}

impl SubmitCommand {
    /// Create a submission for a single workflow source file
    pub fn new(wdl_source: impl Into<PathBuf>) -> Self {
        Self {
            wdl_source: wdl_source.into(),
            workflow_inputs: None,
            workflow_options: None,
        }
    }

    /// Attach a workflow inputs file
    pub fn with_inputs(mut self, path: impl Into<PathBuf>) -> Self {
        self.workflow_inputs = Some(path.into());
        self
    }

    /// Attach a workflow options file
    pub fn with_options(mut self, path: impl Into<PathBuf>) -> Self {
        self.workflow_options = Some(path.into());
        self
    }

    /// Inputs path, ignoring an empty one
    pub fn inputs_path(&self) -> Option<&Path> {
        non_empty(&self.workflow_inputs)
    }

    /// Options path, ignoring an empty one
    pub fn options_path(&self) -> Option<&Path> {
        non_empty(&self.workflow_options)
    }
}

fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}

/// Workflow status as reported by the submit, status and abort endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    pub id: String,
    pub status: String,
}

impl WorkflowStatus {
    /// Typed view of the status string
    pub fn state(&self) -> WorkflowState {
        // Parsing never fails; unrecognised values land in `Unknown`.
        self.status.parse().unwrap_or_else(|e: std::convert::Infallible| match e {})
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.status)
    }
}

/// Workflow lifecycle states known to the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    Submitted,
    Running,
    Aborting,
    Aborted,
    Succeeded,
    Failed,
    OnHold,
    Unknown(String),
}

impl WorkflowState {
    /// Whether the engine will not move the workflow to another state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Aborted)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Submitted => "Submitted",
            Self::Running => "Running",
            Self::Aborting => "Aborting",
            Self::Aborted => "Aborted",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::OnHold => "On Hold",
            Self::Unknown(other) => other,
        }
    }
}

impl FromStr for WorkflowState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Submitted" => Self::Submitted,
            "Running" => Self::Running,
            "Aborting" => Self::Aborting,
            "Aborted" => Self::Aborted,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            "On Hold" => Self::OnHold,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
