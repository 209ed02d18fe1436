//! # `charseq` Character Sequence Decoding
//!
//! This is a character-level sequence-to-sequence translation library.
//!
//! A trained encoder/decoder model is treated as an opaque capability
//! (see [`model::Seq2SeqModel`]); `charseq` owns everything around it:
//!
//! * [`vocab`] to load and query character vocabularies.
//! * [`encoding`] to filter source text and build one-hot sequences.
//! * [`decoders`] to run the greedy autoregressive decode loop.
//! * [`translator`] to wire the pieces into a `text -> text` call.
//! * [`segmentation`] to split documents into sentences for translation.
//!
//! A batch parallelism wrapper is available through:
//! * `rayon::ParallelRayonTranslator`
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
//!
//! ## Translating Text
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use charseq::translator::{TextTranslator, Translator, TranslatorOptions};
//! use charseq::vocab::io::{load_char_to_index_json_path, load_index_to_char_json_path};
//!
//! let source = Arc::new(load_char_to_index_json_path::<u32, _>("esCharToInt.json")?);
//! let target = Arc::new(load_index_to_char_json_path::<u32, _>("intToEnChar.json")?);
//!
//! let translator = Translator::new(source, target, my_model, TranslatorOptions::default())?;
//!
//! match translator.try_translate_document("Hola. ¿Qué tal?")? {
//!     Some(text) => println!("{text}"),
//!     None => println!("nothing to translate"),
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod decoders;
pub mod encoding;
pub mod errors;
pub mod model;
pub mod segmentation;
pub mod translator;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::{CancellationToken, DecodeOutcome, GreedyDecoder, StopReason};
#[doc(inline)]
pub use errors::{CSError, CSResult};
#[doc(inline)]
pub use model::{LstmState, Seq2SeqModel, StepOutput};
#[doc(inline)]
pub use translator::{TextTranslator, Translator, TranslatorOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{CharVocab, SpecialTokens};
