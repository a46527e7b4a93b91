//! Cromwell command-line client library

pub mod config;
pub mod workflow;

use anyhow::Result;
use tracing::info;

// Re-export CLI types for testing
pub use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cromwell")]
#[command(about = "Submit and inspect workflows on a Cromwell server")]
#[command(version, author, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: config::ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the engine version
    Version,
    /// Submit a workflow for execution
    Submit(workflow::SubmitArgs),
    /// Show the status of a workflow
    Status(workflow::WorkflowArgs),
    /// Show or save the outputs of a workflow
    Outputs(workflow::ExportArgs),
    /// Show or save the metadata of a workflow
    Metadata(workflow::ExportArgs),
    /// Abort a running workflow
    Abort(workflow::WorkflowArgs),
}

impl Cli {
    /// Set up logging, connect to the server and run the selected command
    pub async fn run(self) -> Result<()> {
        config::init_tracing(&self.config.log_level);

        let client = self.config.client()?;
        info!(url = %client.base_url(), "using Cromwell server");

        let line = match self.command {
            Commands::Version => workflow::version(&client).await?,
            Commands::Submit(args) => args.run(&client).await?,
            Commands::Status(args) => workflow::status(&client, &args.workflow_id).await?,
            Commands::Abort(args) => workflow::abort(&client, &args.workflow_id).await?,
            Commands::Outputs(args) => return args.run_outputs(&client).await,
            Commands::Metadata(args) => return args.run_metadata(&client).await,
        };
        println!("{}", line);
        Ok(())
    }
}
