//! # Sentence Segmentation
//!
//! Character-level models are trained on single sentences; documents are
//! split with a [`SentenceSplitter`] and translated one sentence at a time.

mod sentence_splitter;

pub use sentence_splitter::{DEFAULT_SENTENCE_BOUNDARY_PATTERN, SentenceSplitter};
