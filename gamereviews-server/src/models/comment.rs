//! New comment validation

use serde_json::Value;

use super::ValidationError;

/// Validated comment body and author for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    body: String,
    author: String,
}

impl NewComment {
    /// Extract `body` and `author` from a post body.
    ///
    /// Both must be present and JSON strings. Other fields (including any
    /// client-supplied `votes` or `created_at`) are ignored.
    pub fn from_body(value: &Value) -> Result<Self, ValidationError> {
        match (value.get("body"), value.get("author")) {
            (Some(Value::String(body)), Some(Value::String(author))) => Ok(Self {
                body: body.clone(),
                author: author.clone(),
            }),
            _ => Err(ValidationError::InvalidPost),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}
