//! Request URL construction
//!
//! URLs are composed by plain string concatenation onto the base URL. The
//! workflow ID is inserted as given, without escaping.

pub const ENGINE_ENDPOINT: &str = "/api/engine/v1";
pub const VERSION_ENDPOINT: &str = "/version";

pub const WORKFLOW_ENDPOINT: &str = "/api/workflows/v1";
pub const STATUS_ENDPOINT: &str = "/status";
pub const OUTPUTS_ENDPOINT: &str = "/outputs";
pub const METADATA_ENDPOINT: &str = "/metadata";
pub const ABORT_ENDPOINT: &str = "/abort";

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `{base}/api/workflows/v1/{id}{endpoint}`
pub fn workflow_url(base: &str, workflow_id: &str, endpoint: &str) -> String {
    format!(
        "{}{}/{}{}",
        trim_base(base),
        WORKFLOW_ENDPOINT,
        workflow_id,
        endpoint
    )
}

/// `{base}/api/engine/v1{endpoint}`
pub fn engine_url(base: &str, endpoint: &str) -> String {
    format!("{}{}{}", trim_base(base), ENGINE_ENDPOINT, endpoint)
}

/// `{base}/api/workflows/v1`
pub fn submit_url(base: &str) -> String {
    format!("{}{}", trim_base(base), WORKFLOW_ENDPOINT)
}
