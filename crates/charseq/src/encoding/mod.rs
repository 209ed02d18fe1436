//! # Source Encoding
//!
//! Text is normalized by dropping every character absent from the source
//! vocabulary; the survivors are one-hot encoded for the model's encoder.
//!
//! ```rust
//! use charseq::vocab::CharVocab;
//! use charseq::encoding::{filter_known, one_hot_encode};
//!
//! let vocab: CharVocab<u32> = CharVocab::from_pairs([('a', 2), ('b', 3)]).unwrap();
//!
//! assert_eq!(filter_known(&vocab, "a?b!"), "ab");
//!
//! let seq = one_hot_encode(&vocab, "a?b!").unwrap().unwrap();
//! assert_eq!(seq.indices(), &[2, 3]);
//! assert_eq!(seq.row(0), &[0.0, 0.0, 1.0, 0.0]);
//!
//! assert!(one_hot_encode(&vocab, "???").unwrap().is_none());
//! ```

mod one_hot;
mod source_filter;

pub use one_hot::{OneHotSequence, OneHotVector};
pub use source_filter::{encode_indices, filter_known, one_hot_encode};
