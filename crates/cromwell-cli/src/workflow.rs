//! Workflow commands

use anyhow::{Context, Result};
use clap::Args;
use cromwell_rest_client::contract::{RawPayload, SubmitCommand};
use cromwell_rest_client::CromwellClient;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for submitting a workflow
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Workflow source file
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// JSON file with workflow inputs
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// JSON file with workflow options
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,
}

impl SubmitArgs {
    pub fn to_command(&self) -> SubmitCommand {
        SubmitCommand {
            wdl_source: self.source.clone(),
            workflow_inputs: self.inputs.clone(),
            workflow_options: self.options.clone(),
        }
    }

    /// Submit the workflow and return the line to print
    pub async fn run(self, client: &CromwellClient) -> Result<String> {
        let status = client
            .submit_workflow(&self.to_command())
            .await
            .with_context(|| format!("Failed to submit {}", self.source.display()))?;
        info!(id = %status.id, "workflow submitted");
        Ok(status.to_string())
    }
}

/// Arguments naming a single workflow
#[derive(Args, Debug)]
pub struct WorkflowArgs {
    /// Workflow ID
    #[arg(value_name = "ID")]
    pub workflow_id: String,
}

/// Arguments for commands that can save the raw response
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Workflow ID
    #[arg(value_name = "ID")]
    pub workflow_id: String,

    /// Write the raw JSON response to FILE instead of printing it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub async fn run_outputs(self, client: &CromwellClient) -> Result<()> {
        let outputs = client
            .workflow_outputs(&self.workflow_id)
            .await
            .with_context(|| format!("Failed to fetch outputs for {}", self.workflow_id))?;
        emit(&outputs, self.output.as_deref())
    }

    pub async fn run_metadata(self, client: &CromwellClient) -> Result<()> {
        let metadata = client
            .workflow_metadata(&self.workflow_id)
            .await
            .with_context(|| format!("Failed to fetch metadata for {}", self.workflow_id))?;
        emit(&metadata, self.output.as_deref())
    }
}

/// Save the payload to `output` when given, otherwise print it
fn emit<P: RawPayload + Display>(payload: &P, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            payload.write_to(path)?;
            info!(id = payload.id(), path = %path.display(), "response saved");
        }
        None => println!("{}", payload),
    }
    Ok(())
}

pub async fn version(client: &CromwellClient) -> Result<String> {
    let version = client.version().await.context("Failed to query engine version")?;
    Ok(version.trim_end().to_string())
}

pub async fn status(client: &CromwellClient, workflow_id: &str) -> Result<String> {
    let status = client
        .workflow_status(workflow_id)
        .await
        .with_context(|| format!("Failed to fetch status for {}", workflow_id))?;
    Ok(status.to_string())
}

pub async fn abort(client: &CromwellClient, workflow_id: &str) -> Result<String> {
    let status = client
        .abort_workflow(workflow_id)
        .await
        .with_context(|| format!("Failed to abort {}", workflow_id))?;
    Ok(status.to_string())
}
