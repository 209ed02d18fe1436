//! # Source Filtering

use crate::{
    encoding::OneHotSequence,
    errors::{CSError, CSResult},
    types::TokenType,
    vocab::CharVocab,
};

/// Drop every character of `text` not present in `vocab`.
pub fn filter_known<T: TokenType>(
    vocab: &CharVocab<T>,
    text: &str,
) -> String {
    text.chars().filter(|&c| vocab.contains_char(c)).collect()
}

/// Map the known characters of `text` to their indices, dropping the rest.
pub fn encode_indices<T: TokenType>(
    vocab: &CharVocab<T>,
    text: &str,
) -> Vec<T> {
    text.chars().filter_map(|c| vocab.char_to_index(c)).collect()
}

/// One-hot encode the known characters of `text`.
///
/// Rows are `vocab.width()` wide.
///
/// ## Returns
/// `Ok(None)` when no character of `text` is in the vocab.
pub fn one_hot_encode<T: TokenType>(
    vocab: &CharVocab<T>,
    text: &str,
) -> CSResult<Option<OneHotSequence>> {
    let indices = encode_indices(vocab, text)
        .into_iter()
        .map(|t| t.to_usize().ok_or(CSError::TokenOutOfRange))
        .collect::<CSResult<Vec<usize>>>()?;

    if indices.is_empty() {
        return Ok(None);
    }

    OneHotSequence::from_indices(indices, vocab.width()).map(Some)
}
