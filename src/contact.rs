#[cfg(feature = "ssr")]
mod api;
#[cfg(feature = "ssr")]
mod relay;

#[cfg(feature = "ssr")]
pub use api::{contact_handler, contact_router};
#[cfg(feature = "ssr")]
pub use relay::ContactRelay;

use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xyzpkpvg";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let required = [
            (&self.name, "Name"),
            (&self.email, "Email"),
            (&self.subject, "Subject"),
            (&self.message, "Message"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                errors.push(format!("{label} is required"));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_PATTERN.is_match(email) {
            errors.push("Email is invalid".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Message sent successfully!".to_string(),
            errors: Vec::new(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            success: false,
            message: "Method not allowed".to_string(),
            errors: Vec::new(),
        }
    }
}

impl From<&ContactError> for ContactResponse {
    fn from(err: &ContactError) -> Self {
        let (message, errors) = match err {
            ContactError::Validation(errors) => ("Validation failed", errors.clone()),
            ContactError::Upstream { message, .. } => {
                ("Failed to send message", vec![message.clone()])
            }
            ContactError::Transport(_) => ("Server error, please try again later", Vec::new()),
        };
        Self {
            success: false,
            message: message.to_string(),
            errors,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Form service responded {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("Couldn't reach form service: {0}")]
    Transport(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ContactError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let errors = ContactFormData::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Name is required",
                "Email is required",
                "Subject is required",
                "Message is required"
            ]
        );

        // Whitespace counts as blank
        let blank_subject = ContactFormData {
            subject: "   ".to_string(),
            ..form()
        };
        assert_eq!(
            blank_subject.validate().unwrap_err(),
            vec!["Subject is required"]
        );
    }

    #[test]
    fn test_email_format() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com"] {
            let f = ContactFormData {
                email: bad.to_string(),
                ..form()
            };
            assert_eq!(f.validate().unwrap_err(), vec!["Email is invalid"], "{bad}");
        }
        let padded = ContactFormData {
            email: "  ada@example.com ".to_string(),
            ..form()
        };
        assert!(padded.validate().is_ok());
    }

    #[test]
    fn test_missing_json_fields_default_to_blank() {
        let f: ContactFormData =
            serde_json::from_str(r#"{"name":"Ada"}"#).expect("partial form should parse");
        assert_eq!(f.name, "Ada");
        assert!(f.email.is_empty());
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ContactError::Validation(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::Upstream {
                status: 422,
                message: "bad".to_string()
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ContactError::Upstream {
                status: 42,
                message: "bad".to_string()
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ContactError::Transport("refused".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_responses() {
        let res = ContactResponse::from(&ContactError::Validation(vec![
            "Name is required".to_string()
        ]));
        assert!(!res.success);
        assert_eq!(res.message, "Validation failed");
        assert_eq!(res.errors, vec!["Name is required"]);

        let res = ContactResponse::from(&ContactError::Upstream {
            status: 403,
            message: "Form not found".to_string(),
        });
        assert_eq!(res.message, "Failed to send message");
        assert_eq!(res.errors, vec!["Form not found"]);

        let res = ContactResponse::from(&ContactError::Transport("timeout".to_string()));
        assert_eq!(res.message, "Server error, please try again later");
        assert!(res.errors.is_empty());
    }

    #[test]
    fn test_empty_errors_omitted_from_json() {
        let json = serde_json::to_string(&ContactResponse::sent()).expect("serializes");
        assert_eq!(json, r#"{"success":true,"message":"Message sent successfully!"}"#);
    }
}
