//! Google Forms API client boundary.
//!
//! Provides a trait-based abstraction over the three Forms API v1 calls
//! the generator needs, enabling dependency injection for testing.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;

use crate::error::{FormgenError, Result};
use crate::wire::{FormDocument, Request};

/// Base URL of the Forms API v1 forms collection.
pub const FORMS_BASE_URL: &str = "https://forms.googleapis.com/v1/forms";

/// Network timeout for Forms API calls.
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for the Forms API operations the generator performs.
///
/// Abstraction allows tests to mock the service without network access.
#[cfg_attr(test, mockall::automock)]
pub trait FormsApi {
    /// Create a new form carrying only a title.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    fn create_form(&self, title: &str) -> Result<FormDocument>;

    /// Apply a batch of update requests to the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn batch_update(&self, form_id: &str, requests: &[Request]) -> Result<()>;

    /// Fetch the current form document, including server-assigned item
    /// ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    fn get_form(&self, form_id: &str) -> Result<FormDocument>;
}

/// HTTP-based Forms API client using `ureq`.
pub struct HttpFormsApi {
    access_token: String,
}

impl HttpFormsApi {
    /// Build a client that authenticates with the given bearer token.
    #[must_use]
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Body of a `batchUpdate` call.
#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [Request],
}

/// Body of the form-creation call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFormBody<'a> {
    info: CreateFormInfo<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFormInfo<'a> {
    title: &'a str,
    document_title: &'a str,
}

impl FormsApi for HttpFormsApi {
    fn create_form(&self, title: &str) -> Result<FormDocument> {
        let body = CreateFormBody {
            info: CreateFormInfo {
                title,
                document_title: title,
            },
        };
        let response = http_agent()
            .post(FORMS_BASE_URL)
            .header("Authorization", &self.bearer())
            .send_json(&body)
            .map_err(|e| map_ureq_error("create", &e))?;
        response
            .into_body()
            .read_json::<FormDocument>()
            .map_err(|e| map_ureq_error("create", &e))
    }

    fn batch_update(&self, form_id: &str, requests: &[Request]) -> Result<()> {
        let url = format!("{FORMS_BASE_URL}/{form_id}:batchUpdate");
        let body = BatchUpdateBody { requests };
        http_agent()
            .post(&url)
            .header("Authorization", &self.bearer())
            .send_json(&body)
            .map_err(|e| map_ureq_error("batchUpdate", &e))?;
        Ok(())
    }

    fn get_form(&self, form_id: &str) -> Result<FormDocument> {
        let url = format!("{FORMS_BASE_URL}/{form_id}");
        let response = http_agent()
            .get(&url)
            .header("Authorization", &self.bearer())
            .call()
            .map_err(|e| map_ureq_error("get", &e))?;
        response
            .into_body()
            .read_json::<FormDocument>()
            .map_err(|e| map_ureq_error("get", &e))
    }
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(API_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`FormgenError::Api`] naming the operation.
fn map_ureq_error(operation: &'static str, err: &ureq::Error) -> FormgenError {
    let reason = match err {
        ureq::Error::StatusCode(code) => format!("HTTP status {code}"),
        other => other.to_string(),
    };
    FormgenError::Api { operation, reason }
}
