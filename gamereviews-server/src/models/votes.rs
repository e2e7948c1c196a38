//! Vote increment validation

use serde_json::Value;

use super::ValidationError;

/// Validated signed change to a review's vote count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIncrement(i32);

impl VoteIncrement {
    /// Extract `inc_votes` from a patch body.
    ///
    /// # Rules
    /// - `inc_votes` must be present and numeric: a JSON number, or a string
    ///   holding one; otherwise `InvalidPatch`
    /// - A numeric value that is not an integer in the `i32` range is
    ///   `NonIntegerVotes`, reported like any other value the store refuses
    /// - Every other field is ignored
    ///
    /// # Example
    /// ```
    /// use gamereviews_server::models::{ValidationError, VoteIncrement};
    /// use serde_json::json;
    ///
    /// assert!(VoteIncrement::from_body(&json!({ "inc_votes": -3 })).is_ok());
    /// assert!(VoteIncrement::from_body(&json!({ "inc_votes": "4" })).is_ok());
    /// assert_eq!(
    ///     VoteIncrement::from_body(&json!({ "inc_votes": "cat" })),
    ///     Err(ValidationError::InvalidPatch)
    /// );
    /// assert_eq!(
    ///     VoteIncrement::from_body(&json!({ "inc_votes": 1.5 })),
    ///     Err(ValidationError::NonIntegerVotes)
    /// );
    /// ```
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let (integer, numeric) = match body.get("inc_votes") {
            Some(Value::Number(n)) => (n.as_i64().and_then(|n| i32::try_from(n).ok()), true),
            Some(Value::String(s)) => {
                let s = s.trim();
                let numeric = s.parse::<f64>().is_ok_and(|f| !f.is_nan());
                (s.parse::<i32>().ok(), numeric)
            }
            _ => (None, false),
        };

        match integer {
            Some(delta) => Ok(Self(delta)),
            None if numeric => Err(ValidationError::NonIntegerVotes),
            None => Err(ValidationError::InvalidPatch),
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
