// src/message.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "India";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_LOCATION: &str = "Not provided";

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftResponse {
    pub draft: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Value of a required field, untouched, or `None` when it is absent or empty.
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Present values pass through untouched, even when empty.
pub fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_only() {
        assert_eq!(required(&None), None);
        assert_eq!(required(&Some(String::new())), None);
        assert_eq!(required(&Some("   ".into())), Some("   "));
        assert_eq!(required(&Some(" rent ".into())), Some(" rent "));
    }

    #[test]
    fn defaults_only_apply_when_absent() {
        assert_eq!(or_default(&None, DEFAULT_COUNTRY), "India");
        assert_eq!(or_default(&Some(String::new()), DEFAULT_COUNTRY), "");
        assert_eq!(or_default(&Some("Kenya".into()), DEFAULT_COUNTRY), "Kenya");
    }

    #[test]
    fn chat_request_accepts_nulls() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","country":null}"#).unwrap();
        assert_eq!(req.message.as_deref(), Some("hi"));
        assert!(req.country.is_none());
        assert!(req.location.is_none());
    }
}
