//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - One parameterized statement per read, aggregates via LEFT JOIN
//! - Absent rows become `DbError::NotFound`, never an empty success
//! - Multi-step writes run inside a transaction

pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;

pub use categories::{Category, CategoryRepo};
pub use comments::{Comment, CommentRepo};
pub use reviews::{Review, ReviewRepo, ReviewWithCount};
pub use users::{User, UserRepo};

/// PostgreSQL SQLSTATE codes raised when the client supplied a value the
/// store refused: `22P02` invalid_text_representation, `22003`
/// numeric_value_out_of_range, `23503` foreign_key_violation.
const REJECTED_INPUT_CODES: &[&str] = &["22P02", "22003", "23503"];

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("no {resource} found under id {id}")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    /// The store rejected an input value (malformed id, out-of-range number,
    /// dangling reference) rather than failing on its own.
    pub fn is_rejected_input(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e
                .code()
                .is_some_and(|code| REJECTED_INPUT_CODES.contains(&&*code)),
            _ => false,
        }
    }

    pub(crate) fn not_found(resource: &'static str, id: &str) -> Self {
        Self::NotFound {
            resource,
            id: id.to_owned(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Stand-in for a PostgreSQL error carrying only a SQLSTATE code.
    #[derive(Debug)]
    pub struct FakePgError(pub &'static str);

    impl fmt::Display for FakePgError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake postgres error {}", self.0)
        }
    }

    impl StdError for FakePgError {}

    impl DatabaseError for FakePgError {
        fn message(&self) -> &str {
            "fake postgres error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    pub fn pg_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakePgError(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::pg_error;
    use super::*;

    #[test]
    fn invalid_text_representation_is_rejected_input() {
        assert!(DbError::from(pg_error("22P02")).is_rejected_input());
    }

    #[test]
    fn out_of_range_and_dangling_reference_are_rejected_input() {
        assert!(DbError::from(pg_error("22003")).is_rejected_input());
        assert!(DbError::from(pg_error("23503")).is_rejected_input());
    }

    #[test]
    fn other_failures_are_not_rejected_input() {
        assert!(!DbError::from(pg_error("42P01")).is_rejected_input());
        assert!(!DbError::from(sqlx::Error::RowNotFound).is_rejected_input());
        assert!(!DbError::not_found("review", "9").is_rejected_input());
    }

    #[test]
    fn not_found_message() {
        let err = DbError::not_found("review", "999");
        assert_eq!(err.to_string(), "no review found under id 999");
    }
}
