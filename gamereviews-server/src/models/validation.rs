//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Vote patch without a usable `inc_votes`
    InvalidPatch,

    /// Comment post without string `body` and `author`
    InvalidPost,

    /// `inc_votes` is numeric but not a 32-bit integer (`1.5`, `"1e2"`,
    /// `4294967296`); the store would refuse it as a vote delta
    NonIntegerVotes,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPatch => write!(f, "Invalid patch request, please reformat your patch"),
            Self::InvalidPost => write!(f, "Invalid post request, please reformat your post"),
            Self::NonIntegerVotes => write!(f, "inc_votes must be a whole number of votes"),
        }
    }
}

impl std::error::Error for ValidationError {}
