use std::time::Duration;

use http::{header::ACCEPT, StatusCode};
use reqwest::Client;
use serde::Deserialize;

use super::{ContactError, ContactFormData, ContactResponse};

/// Forwards contact form submissions to a Formspree-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ContactRelay {
    endpoint: String,
    client: Client,
}

#[derive(Deserialize, Default)]
struct UpstreamBody {
    message: Option<String>,
    error: Option<String>,
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        ContactError::Transport(err.to_string())
    }
}

impl ContactRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ContactError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, form: &ContactFormData) -> Result<(), ContactError> {
        form.validate().map_err(ContactError::Validation)?;

        let res = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(form)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.json::<UpstreamBody>().await.unwrap_or_default();
        let message = body
            .message
            .or(body.error)
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ContactError::Upstream {
            status: status.as_u16(),
            message,
        })
    }

    /// Relay `form` and describe the outcome for the caller.
    pub async fn submit(&self, form: &ContactFormData) -> (StatusCode, ContactResponse) {
        match self.send(form).await {
            Ok(()) => {
                tracing::info!(subject = %form.subject, "contact message relayed");
                (StatusCode::OK, ContactResponse::sent())
            }
            Err(err) => {
                match &err {
                    ContactError::Validation(_) => tracing::debug!(%err, "contact form rejected"),
                    _ => tracing::error!(%err, "contact form error"),
                }
                (err.status(), ContactResponse::from(&err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    fn relay(url: String) -> ContactRelay {
        ContactRelay::new(url, Duration::from_secs(5)).expect("client should build")
    }

    #[tokio::test]
    async fn test_relay_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/f/test")
                    .header("accept", "application/json")
                    .json_body(json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "subject": "Hello",
                        "message": "Let's build something"
                    }));
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let (status, res) = relay(server.url("/f/test")).submit(&form()).await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(res, ContactResponse::sent());
    }

    #[tokio::test]
    async fn test_invalid_form_not_relayed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(200);
            })
            .await;

        let bad = ContactFormData {
            email: String::new(),
            ..form()
        };
        let (status, res) = relay(server.url("/f/test")).submit(&bad).await;

        mock.assert_hits_async(0).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(res.message, "Validation failed");
        assert_eq!(res.errors, vec!["Email is required"]);
    }

    #[tokio::test]
    async fn test_upstream_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(422).json_body(json!({ "message": "Form is disabled" }));
            })
            .await;

        let err = relay(server.url("/f/test")).send(&form()).await.unwrap_err();
        assert_eq!(
            err,
            ContactError::Upstream {
                status: 422,
                message: "Form is disabled".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_upstream_error_field_and_empty_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/error-field");
                then.status(403).json_body(json!({ "error": "Form not found" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/empty");
                then.status(500);
            })
            .await;

        let (status, res) = relay(server.url("/error-field")).submit(&form()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(res.errors, vec!["Form not found"]);

        let (status, res) = relay(server.url("/empty")).submit(&form()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.message, "Failed to send message");
        assert_eq!(res.errors, vec!["Unknown error"]);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // nothing listens on the discard port
        let (status, res) = relay("http://127.0.0.1:9/f/test".to_string())
            .submit(&form())
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.message, "Server error, please try again later");
    }
}
