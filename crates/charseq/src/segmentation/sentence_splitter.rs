//! # Regex Sentence Splitter

use regex::Regex;

use crate::errors::{CSError, CSResult};

/// Terminal punctuation (with any closing quotes/brackets) followed by
/// whitespace; or a run of newlines.
pub const DEFAULT_SENTENCE_BOUNDARY_PATTERN: &str = r#"[.!?…]+["'”’»)\]]*\s+|\n+"#;

/// Splits text into sentences at boundary-pattern matches.
///
/// The boundary text stays with the sentence it ends.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Regex,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self {
            boundary: Regex::new(DEFAULT_SENTENCE_BOUNDARY_PATTERN)
                .expect("default sentence pattern compiles"),
        }
    }
}

impl SentenceSplitter {
    /// Build a splitter from a boundary regex.
    ///
    /// ## Returns
    /// [`CSError::InvalidConfig`] if the pattern does not compile.
    pub fn from_pattern(pattern: &str) -> CSResult<Self> {
        let boundary = Regex::new(pattern)
            .map_err(|e| CSError::InvalidConfig(format!("sentence pattern: {e}")))?;
        Ok(Self { boundary })
    }

    /// The boundary pattern.
    pub fn pattern(&self) -> &str {
        self.boundary.as_str()
    }

    /// Split `text` into sentences, boundaries included.
    ///
    /// Whitespace-only pieces are dropped.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut last = 0;
        for m in self.boundary.find_iter(text) {
            let piece = &text[last..m.end()];
            if !piece.trim().is_empty() {
                sentences.push(piece);
            }
            last = m.end();
        }
        let tail = &text[last..];
        if !tail.trim().is_empty() {
            sentences.push(tail);
        }
        sentences
    }

    /// Split `text` into whitespace-trimmed sentences.
    pub fn split_trimmed<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.split(text).into_iter().map(str::trim).collect()
    }
}
