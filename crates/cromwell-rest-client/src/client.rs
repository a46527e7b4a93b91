//! Main REST API client implementation

use cromwell_api_contract::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoints::{
    engine_url, submit_url, workflow_url, ABORT_ENDPOINT, METADATA_ENDPOINT, OUTPUTS_ENDPOINT,
    STATUS_ENDPOINT, VERSION_ENDPOINT,
};
use crate::error::{RestClientError, RestClientResult};
use crate::submit::SubmitForm;

/// REST API client bound to one Cromwell server
#[derive(Debug, Clone)]
pub struct CromwellClient {
    http_client: HttpClient,
    base_url: Url,
}

impl CromwellClient {
    /// Create a new client
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the engine version string
    ///
    /// The body is returned as sent, without trimming. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD rather than failing the call.
    pub async fn version(&self) -> RestClientResult<String> {
        let url = engine_url(self.base_url.as_str(), VERSION_ENDPOINT);
        let body = self.execute(self.http_client.get(&url), &url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Submit a workflow as a multipart upload
    pub async fn submit_workflow(&self, command: &SubmitCommand) -> RestClientResult<WorkflowStatus> {
        let form = SubmitForm::from_command(command).await?;
        let url = submit_url(self.base_url.as_str());
        let request = self.http_client.post(&url).multipart(form.into_multipart());
        self.execute_json(request, &url).await
    }

    /// Get the current status of a workflow
    pub async fn workflow_status(&self, workflow_id: &str) -> RestClientResult<WorkflowStatus> {
        let url = workflow_url(self.base_url.as_str(), workflow_id, STATUS_ENDPOINT);
        self.execute_json(self.http_client.get(&url), &url).await
    }

    /// Get the outputs of a workflow without decoding them
    pub async fn workflow_outputs(&self, workflow_id: &str) -> RestClientResult<WorkflowOutputs> {
        let url = workflow_url(self.base_url.as_str(), workflow_id, OUTPUTS_ENDPOINT);
        let body = self.execute(self.http_client.get(&url), &url).await?;
        Ok(WorkflowOutputs::new(workflow_id, body))
    }

    /// Get the full metadata of a workflow without decoding it
    pub async fn workflow_metadata(&self, workflow_id: &str) -> RestClientResult<WorkflowMetadata> {
        let url = workflow_url(self.base_url.as_str(), workflow_id, METADATA_ENDPOINT);
        let body = self.execute(self.http_client.get(&url), &url).await?;
        Ok(WorkflowMetadata::new(workflow_id, body))
    }

    /// Abort a running workflow
    pub async fn abort_workflow(&self, workflow_id: &str) -> RestClientResult<WorkflowStatus> {
        let url = workflow_url(self.base_url.as_str(), workflow_id, ABORT_ENDPOINT);
        let request = self.http_client.post(&url).header(CONTENT_TYPE, "text/plain").body("");
        self.execute_json(request, &url).await
    }

    // Private helper methods

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> RestClientResult<T> {
        let body = self.execute(request, url).await?;
        serde_json::from_slice(&body).map_err(RestClientError::from)
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(&self, request: RequestBuilder, url: &str) -> RestClientResult<Vec<u8>> {
        debug!(url, "sending request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(url, %status, "request rejected");
            return Err(RestClientError::Status { status });
        }

        let body = response.bytes().await?;
        debug!(url, %status, bytes = body.len(), "request completed");
        Ok(body.to_vec())
    }
}
