//! # Parallel Translator

use rayon::prelude::*;

use crate::{
    decoders::{CancellationToken, DecodeOutcome},
    errors::CSResult,
    segmentation::SentenceSplitter,
    translator::{TextTranslator, join_sentence_translations},
};

/// Batch-Level Parallel Translator Wrapper.
///
/// Independent inputs, and the sentences of a document, are translated as
/// separate ``rayon`` tasks. Each decode is still sequential.
#[derive(Debug, Clone)]
pub struct ParallelRayonTranslator<D: TextTranslator> {
    /// Wrapped translator.
    pub inner: D,
}

impl<D: TextTranslator> ParallelRayonTranslator<D> {
    /// Create a new parallel translator.
    ///
    /// ## Arguments
    /// * `inner` - The translator to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonTranslator` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TextTranslator> TextTranslator for ParallelRayonTranslator<D> {
    fn sentence_splitter(&self) -> &SentenceSplitter {
        self.inner.sentence_splitter()
    }

    fn try_translate_outcome(
        &self,
        text: &str,
        cancel: Option<&CancellationToken>,
    ) -> CSResult<Option<DecodeOutcome>> {
        self.inner.try_translate_outcome(text, cancel)
    }

    fn try_translate_batch(
        &self,
        batch: &[&str],
    ) -> CSResult<Vec<Option<String>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_translate(text))
            .collect()
    }

    fn try_translate_document(
        &self,
        text: &str,
    ) -> CSResult<Option<String>> {
        let sentences = self.sentence_splitter().split_trimmed(text);
        let translations = sentences
            .par_iter()
            .map(|sentence| self.inner.try_translate(sentence))
            .collect::<CSResult<Vec<_>>>()?;
        Ok(join_sentence_translations(translations))
    }

    fn try_translate_document_batch(
        &self,
        batch: &[&str],
    ) -> CSResult<Vec<Option<String>>> {
        batch
            .par_iter()
            .map(|text| self.try_translate_document(text))
            .collect()
    }
}
