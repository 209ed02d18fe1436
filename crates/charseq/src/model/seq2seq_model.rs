//! # Sequence-to-Sequence Model Trait

use std::sync::Arc;

use crate::{
    encoding::{OneHotSequence, OneHotVector},
    errors::CSResult,
};

/// The output of one decoder step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput<S> {
    /// Next-token scores over the target vocabulary.
    pub probs: Vec<f32>,

    /// The updated recurrent state.
    pub state: S,
}

impl<S> StepOutput<S> {
    /// Create a new step output.
    pub fn new(
        probs: Vec<f32>,
        state: S,
    ) -> Self {
        Self { probs, state }
    }
}

/// An encoder/decoder model pair.
///
/// Implementations must be callable from many threads at once;
/// all per-call state travels through [`Seq2SeqModel::State`].
pub trait Seq2SeqModel: Send + Sync {
    /// The recurrent state threaded from the encoder through each decoder step.
    type State: Send;

    /// Run the encoder over a one-hot source sequence.
    ///
    /// ## Arguments
    /// * `sequence` - the encoded source; never empty.
    ///
    /// ## Returns
    /// The initial decoder state.
    fn encode(
        &self,
        sequence: &OneHotSequence,
    ) -> CSResult<Self::State>;

    /// Run one decoder step.
    ///
    /// ## Arguments
    /// * `token` - the previous output token (the start token on the first step).
    /// * `state` - the current state; consumed.
    ///
    /// ## Returns
    /// The next-token scores and the updated state.
    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>>;
}

impl<M: Seq2SeqModel + ?Sized> Seq2SeqModel for Arc<M> {
    type State = M::State;

    fn encode(
        &self,
        sequence: &OneHotSequence,
    ) -> CSResult<Self::State> {
        self.as_ref().encode(sequence)
    }

    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>> {
        self.as_ref().step(token, state)
    }
}

/// The `(cell, hidden)` vector pair of an LSTM layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LstmState {
    /// The cell state.
    pub cell: Vec<f32>,

    /// The hidden state.
    pub hidden: Vec<f32>,
}

impl LstmState {
    /// Create a new state pair.
    pub fn new(
        cell: Vec<f32>,
        hidden: Vec<f32>,
    ) -> Self {
        Self { cell, hidden }
    }

    /// A zeroed state of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self::new(vec![0.0; dim], vec![0.0; dim])
    }

    /// The state dimension, if cell and hidden agree.
    pub fn dim(&self) -> Option<usize> {
        (self.cell.len() == self.hidden.len()).then_some(self.cell.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lstm_state() {
        let state = LstmState::zeros(4);
        assert_eq!(state.dim(), Some(4));
        assert!(state.cell.iter().all(|&v| v == 0.0));

        let ragged = LstmState::new(vec![0.0; 2], vec![0.0; 3]);
        assert_eq!(ragged.dim(), None);
    }
}
