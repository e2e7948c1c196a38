//! Request body validation
//!
//! Mutating requests arrive as raw JSON values and are checked here before
//! any database work. Unknown fields are ignored; a missing or mistyped
//! recognized field returns a `ValidationError`, not a panic.

pub mod comment;
pub mod validation;
pub mod votes;

pub use comment::NewComment;
pub use validation::ValidationError;
pub use votes::VoteIncrement;
