//! # Translators
//!
//! Translation clients should use:
//!
//! * [`Translator`] - a source vocab, a target vocab, and a model.
//! * `ParallelRayonTranslator` - a batch parallelism wrapper around any [`TextTranslator`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use charseq::model::TransitionTableModel;
//! use charseq::translator::{TextTranslator, Translator, TranslatorOptions};
//! use charseq::vocab::CharVocab;
//!
//! let vocab: Arc<CharVocab<u32>> =
//!     Arc::new(CharVocab::from_pairs([('a', 2), ('b', 3)]).unwrap());
//!
//! // a -> b -> stop
//! let model = TransitionTableModel::new([(2, 3), (3, 1)], 1).unwrap();
//!
//! let translator =
//!     Translator::new(vocab.clone(), vocab, model, TranslatorOptions::default()).unwrap();
//!
//! assert_eq!(translator.try_translate("a").unwrap(), Some("b".to_string()));
//! assert_eq!(translator.try_translate("???").unwrap(), None);
//! ```

mod text_translator;
#[allow(clippy::module_inception)]
mod translator;
mod translator_options;

pub use text_translator::{TextTranslator, join_sentence_translations};
pub use translator::Translator;
pub use translator_options::{DEFAULT_MAX_OUTPUT_LEN, TranslatorOptions};
