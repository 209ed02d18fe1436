//! # Encoder/Decoder Translator

use std::sync::Arc;

use crate::{
    decoders::{CancellationToken, DecodeOutcome, GreedyDecoder},
    encoding::one_hot_encode,
    errors::{CSResult, into_inference_error},
    model::Seq2SeqModel,
    segmentation::SentenceSplitter,
    translator::{TextTranslator, TranslatorOptions},
    types::TokenType,
    vocab::CharVocab,
};

/// Translates text with a [`Seq2SeqModel`].
///
/// A call filters the text through the source vocab, runs the encoder once
/// over the one-hot sequence, then greedy-decodes through the target vocab.
/// Translators hold no mutable state and may be shared across threads.
#[derive(Debug, Clone)]
pub struct Translator<T: TokenType, M: Seq2SeqModel> {
    source: Arc<CharVocab<T>>,
    decoder: GreedyDecoder<T>,
    model: M,
    options: TranslatorOptions<T>,
    splitter: SentenceSplitter,
}

impl<T: TokenType, M: Seq2SeqModel> Translator<T, M> {
    /// Create a new translator.
    ///
    /// ## Arguments
    /// * `source` - the `char -> index` vocab of the encoder.
    /// * `target` - the `index -> char` vocab of the decoder.
    /// * `model` - the encoder/decoder model.
    /// * `options` - the decode options; validated here.
    pub fn new(
        source: Arc<CharVocab<T>>,
        target: Arc<CharVocab<T>>,
        model: M,
        options: TranslatorOptions<T>,
    ) -> CSResult<Self> {
        options.validate()?;
        if source.is_empty() {
            log::warn!("source vocab is empty; every input will be skipped");
        }

        let decoder = GreedyDecoder::new(target, options.special_tokens, options.max_output_len)?;

        Ok(Self {
            source,
            decoder,
            model,
            options,
            splitter: SentenceSplitter::default(),
        })
    }

    /// Replace the sentence splitter used for documents.
    pub fn with_splitter(
        mut self,
        splitter: SentenceSplitter,
    ) -> Self {
        self.splitter = splitter;
        self
    }

    /// The source vocab.
    pub fn source(&self) -> &Arc<CharVocab<T>> {
        &self.source
    }

    /// The target vocab.
    pub fn target(&self) -> &Arc<CharVocab<T>> {
        self.decoder.target()
    }

    /// The decoder.
    pub fn decoder(&self) -> &GreedyDecoder<T> {
        &self.decoder
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The options.
    pub fn options(&self) -> &TranslatorOptions<T> {
        &self.options
    }
}

impl<T: TokenType, M: Seq2SeqModel> TextTranslator for Translator<T, M> {
    fn sentence_splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, cancel)))]
    fn try_translate_outcome(
        &self,
        text: &str,
        cancel: Option<&CancellationToken>,
    ) -> CSResult<Option<DecodeOutcome>> {
        let Some(sequence) = one_hot_encode(&self.source, text)? else {
            log::debug!("no source chars in {} input chars; skipping", text.chars().count());
            return Ok(None);
        };

        log::debug!("encoding {} source chars", sequence.len());
        let state = self
            .model
            .encode(&sequence)
            .map_err(into_inference_error)?;

        let outcome = self.decoder.decode(&self.model, state, cancel)?;
        log::debug!(
            "decoded {} chars in {} steps ({:?})",
            outcome.text.chars().count(),
            outcome.steps,
            outcome.stop_reason
        );
        Ok(Some(outcome))
    }
}
