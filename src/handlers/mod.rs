mod anagram_handlers;
mod error;

pub use anagram_handlers::*;
pub use error::ApiError;
