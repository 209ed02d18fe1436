//! # Text Translator Trait

use crate::{
    decoders::{CancellationToken, DecodeOutcome},
    errors::CSResult,
    segmentation::SentenceSplitter,
};

/// Joins per-sentence translations into a document translation.
///
/// Each translated sentence is followed by a single space.
///
/// ## Returns
/// `None` if no sentence produced a translation.
pub fn join_sentence_translations<I>(translations: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut document = String::new();
    let mut any = false;
    for translation in translations.into_iter().flatten() {
        document.push_str(&translation);
        document.push(' ');
        any = true;
    }
    any.then_some(document)
}

/// Trait for `text -> text` translators.
pub trait TextTranslator: Send + Sync {
    /// The splitter used by the document methods.
    fn sentence_splitter(&self) -> &SentenceSplitter;

    /// Translate one input, reporting how the decode stopped.
    ///
    /// ## Arguments
    /// * `text` - the source text.
    /// * `cancel` - checked before every decoder step.
    ///
    /// ## Returns
    /// `Ok(None)` if `text` has no characters in the source vocab.
    fn try_translate_outcome(
        &self,
        text: &str,
        cancel: Option<&CancellationToken>,
    ) -> CSResult<Option<DecodeOutcome>>;

    /// Translate one input.
    ///
    /// ## Returns
    /// `Ok(None)` if `text` has no characters in the source vocab;
    /// `Ok(Some(""))` is a valid (empty) translation.
    fn try_translate(
        &self,
        text: &str,
    ) -> CSResult<Option<String>> {
        Ok(self
            .try_translate_outcome(text, None)?
            .map(|outcome| outcome.text))
    }

    /// Translate one input, with cancellation.
    fn try_translate_with_cancel(
        &self,
        text: &str,
        cancel: &CancellationToken,
    ) -> CSResult<Option<String>> {
        Ok(self
            .try_translate_outcome(text, Some(cancel))?
            .map(|outcome| outcome.text))
    }

    /// Translate a batch of independent inputs.
    ///
    /// Fails on the first error; results keep input order.
    fn try_translate_batch(
        &self,
        batch: &[&str],
    ) -> CSResult<Vec<Option<String>>> {
        batch.iter().map(|text| self.try_translate(text)).collect()
    }

    /// Translate a multi-sentence document.
    ///
    /// The document is split into trimmed sentences, each sentence is
    /// translated, and the results are joined by
    /// [`join_sentence_translations`].
    fn try_translate_document(
        &self,
        text: &str,
    ) -> CSResult<Option<String>> {
        let translations = self
            .sentence_splitter()
            .split_trimmed(text)
            .into_iter()
            .map(|sentence| self.try_translate(sentence))
            .collect::<CSResult<Vec<_>>>()?;
        Ok(join_sentence_translations(translations))
    }

    /// Translate a batch of documents.
    fn try_translate_document_batch(
        &self,
        batch: &[&str],
    ) -> CSResult<Vec<Option<String>>> {
        batch
            .iter()
            .map(|text| self.try_translate_document(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_sentence_translations() {
        assert_eq!(
            join_sentence_translations([Some("hi.".to_string()), None, Some("ok".to_string())]),
            Some("hi. ok ".to_string())
        );
        assert_eq!(
            join_sentence_translations([Some(String::new())]),
            Some(" ".to_string())
        );
        assert_eq!(join_sentence_translations([None, None]), None);
        assert_eq!(join_sentence_translations(Vec::new()), None);
    }
}
