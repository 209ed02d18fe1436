//! # Character Vocabularies
//!
//! A [`CharVocab`] is an immutable, bidirectional `char <-> index` table.
//!
//! A translator holds two of them:
//! * a *source* vocab, used to filter and one-hot encode the input text;
//! * a *target* vocab, used to map decoded indices back to characters.
//!
//! The reserved start/stop indices of the decoder live in [`SpecialTokens`].
//!
//! ## Loading
//!
//! See [`io`] for the JSON table formats.

pub mod char_vocab;
pub mod io;
pub mod special_tokens;

pub use char_vocab::CharVocab;
pub use special_tokens::SpecialTokens;
