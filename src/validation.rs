use thiserror::Error;

/// Why a query word was rejected. The messages go out on the wire as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("word should be minimun 2 characthers long")]
    TooShort,
    #[error("only characters allowed")]
    InvalidCharacters,
}

/// Expects an already lowercased word.
pub fn validate(word: &str) -> Result<(), ValidationError> {
    if word.chars().count() < 2 {
        return Err(ValidationError::TooShort);
    }

    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(())
}
