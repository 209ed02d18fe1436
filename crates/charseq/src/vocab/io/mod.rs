//! # Vocabulary IO
//!
//! Vocab tables are flat JSON objects:
//! * `char -> index`: `{"a": 2, "b": 3}`; used for source vocabularies.
//! * `index -> char`: `{"2": "a", "3": "b"}`; used for target vocabularies.
//!
//! Both directions load into a [`CharVocab`](crate::vocab::CharVocab).

mod json_vocab;

pub use json_vocab::*;
