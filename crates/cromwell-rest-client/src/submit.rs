//! Multipart form assembly for workflow submission

use cromwell_api_contract::SubmitCommand;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::debug;

use crate::error::{RestClientError, RestClientResult};

pub const WDL_SOURCE_FIELD: &str = "wdlSource";
pub const WORKFLOW_INPUTS_FIELD: &str = "workflowInputs";
pub const WORKFLOW_OPTIONS_FIELD: &str = "workflowOptions";

/// One uploaded file of the submission form
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormFile {
    pub(crate) field: &'static str,
    pub(crate) file_name: String,
    pub(crate) contents: Vec<u8>,
}

/// Submission form with every file already read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SubmitForm {
    files: Vec<FormFile>,
}

impl SubmitForm {
    /// Read the files named by `command` into form parts.
    ///
    /// The workflow source is mandatory. Inputs and options are added only
    /// when their paths are set and non-empty.
    pub(crate) async fn from_command(command: &SubmitCommand) -> RestClientResult<Self> {
        let mut form = Self::default();
        form.add_file(WDL_SOURCE_FIELD, &command.wdl_source).await?;
        if let Some(inputs) = command.inputs_path() {
            form.add_file(WORKFLOW_INPUTS_FIELD, inputs).await?;
        }
        if let Some(options) = command.options_path() {
            form.add_file(WORKFLOW_OPTIONS_FIELD, options).await?;
        }
        Ok(form)
    }

    async fn add_file(&mut self, field: &'static str, path: &Path) -> RestClientResult<()> {
        let contents = tokio::fs::read(path).await.map_err(|source| RestClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(field, path = %path.display(), bytes = contents.len(), "adding form file");
        self.files.push(FormFile {
            field,
            file_name: path.display().to_string(),
            contents,
        });
        Ok(())
    }

    #[cfg(test)]
    fn files(&self) -> &[FormFile] {
        &self.files
    }

    /// Look up a part by form field name
    #[cfg(test)]
    fn part(&self, field: &str) -> Option<&FormFile> {
        self.files.iter().find(|f| f.field == field)
    }

    /// Convert into the multipart body sent on the wire
    pub(crate) fn into_multipart(self) -> Form {
        self.files.into_iter().fold(Form::new(), |form, file| {
            form.part(file.field, Part::bytes(file.contents).file_name(file.file_name))
        })
    }
}
