//! # Autoregressive Decoders
//!
//! [`GreedyDecoder`] runs the decode loop as a two-state machine:
//!
//! * `Decoding`: call the model with the previous token and state, take the
//!   [`argmax`] of the scores; stop on the stop token, otherwise append the
//!   char and feed it back.
//! * `Stopped`: terminal; reached on the stop token or the length bound.
//!
//! Decodes may be driven to completion with [`GreedyDecoder::decode`], or one
//! step at a time through a [`DecodeContext`].

pub mod argmax;
mod cancellation;
mod decode_context;
mod decode_results;
mod greedy_decoder;

pub use argmax::argmax;
pub use cancellation::CancellationToken;
pub use decode_context::DecodeContext;
pub use decode_results::{DecodeOutcome, DecodeState, StopReason};
pub use greedy_decoder::GreedyDecoder;
