use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One-or-more non-space/non-`@` chars, `@`, same again, a dot, same again.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MIN_MESSAGE_LENGTH: usize = 10;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Trimmed, validated submission. These are the values that get stored.
#[derive(Debug, Clone)]
pub struct ContactInsert {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<NewContactRequest> for ContactInsert {
    type Error = AppError;

    fn try_from(request: NewContactRequest) -> Result<Self, AppError> {
        let name = trimmed(request.name);
        let email = trimmed(request.email);
        let subject = trimmed(request.subject);
        let message = trimmed(request.message);

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        if message.chars().count() < MIN_MESSAGE_LENGTH {
            return Err(AppError::Validation(
                "Message must be at least 10 characters".to_string(),
            ));
        }

        Ok(ContactInsert {
            name,
            email,
            subject,
            message,
        })
    }
}

fn trimmed(field: Option<String>) -> String {
    field.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub id: i32,
}
