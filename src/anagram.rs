use std::collections::HashSet;

use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::validation::{validate, ValidationError};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("words should not be equal")]
    EqualWords,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// Neither the word itself nor any anagram of it is in the dictionary.
    Unknown,
    /// May be empty when only the word itself was found.
    Anagrams(Vec<String>),
}

/// True when both words are built from the same set of distinct characters.
/// Counts and lengths are ignored, so "aab" and "ab" match.
pub fn has_pattern(a: &str, b: &str) -> bool {
    char_set(a) == char_set(b)
}

fn char_set(word: &str) -> HashSet<char> {
    word.chars().collect()
}

pub fn find(dictionary: &Dictionary, word: &str) -> Result<FindOutcome, ValidationError> {
    validate(word)?;

    let mut self_match = false;
    let mut anagrams = Vec::new();

    for candidate in dictionary.iter().filter(|w| w.len() == word.len()) {
        if candidate == word {
            self_match = true;
            continue;
        }

        if has_pattern(word, candidate) {
            anagrams.push(candidate.to_owned());
        }
    }

    tracing::debug!(
        "{word}: self match {self_match}, {} anagram(s).",
        anagrams.len()
    );

    if !self_match && anagrams.is_empty() {
        return Ok(FindOutcome::Unknown);
    }

    Ok(FindOutcome::Anagrams(anagrams))
}

/// Both words must pass validation, differ, share length and character set,
/// and both appear in the dictionary.
pub fn compare(dictionary: &Dictionary, word1: &str, word2: &str) -> Result<bool, CompareError> {
    validate(word1)?;
    validate(word2)?;

    if word1 == word2 {
        return Err(CompareError::EqualWords);
    }

    if word1.len() != word2.len() || !has_pattern(word1, word2) {
        return Ok(false);
    }

    let (mut seen1, mut seen2) = (false, false);
    for word in dictionary.iter() {
        if word == word1 {
            seen1 = true;
        } else if word == word2 {
            seen2 = true;
        } else {
            continue;
        }

        if seen1 && seen2 {
            return Ok(true);
        }
    }

    tracing::debug!("{word1} found: {seen1}, {word2} found: {seen2}.");
    Ok(false)
}
