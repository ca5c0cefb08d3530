use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch word list from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Ordered, read-only word list. Built once at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Loads a line-oriented word list from a file path or an http(s) URL.
    pub async fn load(source: &str) -> Result<Self, DictionaryError> {
        let text = if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source)
                .await
                .map_err(|source_err| DictionaryError::Http {
                    url: source.to_owned(),
                    source: source_err,
                })?
        } else {
            tokio::fs::read_to_string(source)
                .await
                .map_err(|source_err| DictionaryError::Io {
                    path: source.into(),
                    source: source_err,
                })?
        };

        Ok(Self::from_lines(&text))
    }

    async fn fetch(url: &str) -> reqwest::Result<String> {
        tracing::debug!("Fetching word list from {url}.");
        reqwest::get(url).await?.error_for_status()?.text().await
    }

    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
