use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::{
    anagram::{self, FindOutcome},
    app_state::AppState,
};

// Missing parameters fall through to validation as empty words.
#[derive(Deserialize)]
pub struct FindParams {
    #[serde(default)]
    pub word: String,
}

#[derive(Deserialize)]
pub struct CompareParams {
    #[serde(default)]
    pub word1: String,
    #[serde(default)]
    pub word2: String,
}

pub async fn find_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FindParams>,
) -> Result<Response, ApiError> {
    let word = params.word.to_lowercase();

    Ok(match anagram::find(&state.dictionary, &word)? {
        FindOutcome::Unknown => Json(false).into_response(),
        FindOutcome::Anagrams(words) => Json(words).into_response(),
    })
}

pub async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<bool>, ApiError> {
    let word1 = params.word1.to_lowercase();
    let word2 = params.word2.to_lowercase();

    let matched = anagram::compare(&state.dictionary, &word1, &word2)?;
    Ok(Json(matched))
}
