//! # Model Boundary
//!
//! The trained encoder/decoder pair is an opaque collaborator behind
//! [`Seq2SeqModel`]:
//!
//! * `encode(sequence) -> state` runs once per translation;
//! * `step(token, state) -> (probabilities, state)` runs once per decoded token.
//!
//! The decode loop in [`crate::decoders`] only depends on this contract,
//! so it can be exercised against deterministic stubs.

mod seq2seq_model;
mod transition_table;

pub use seq2seq_model::{LstmState, Seq2SeqModel, StepOutput};
pub use transition_table::{MAX_TRANSITION_INDEX, TransitionTableModel};
