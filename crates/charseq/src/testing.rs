//! # Test Models
//!
//! Deterministic [`Seq2SeqModel`] stubs for exercising decode and
//! translation logic without trained weights.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    decoders::CancellationToken,
    encoding::{OneHotSequence, OneHotVector},
    errors::{CSError, CSResult},
    model::{Seq2SeqModel, StepOutput},
};

/// Compile-time assertion that a shared value may cross threads.
pub fn assert_send_sync<S: Send + Sync>(_: &S) {}

/// A one-hot score vector; indices outside `width` leave it all zero.
pub fn one_hot_scores(
    index: usize,
    width: usize,
) -> Vec<f32> {
    let mut scores = vec![0.0; width];
    if let Some(v) = scores.get_mut(index) {
        *v = 1.0;
    }
    scores
}

/// A model replaying a fixed list of score vectors.
///
/// The state is the position in the script. Once the script is exhausted,
/// a repeating model replays the last entry; otherwise the step fails.
#[derive(Debug)]
pub struct ScriptedModel {
    scores: Vec<Vec<f32>>,
    repeat_last: bool,
    steps: AtomicUsize,
    seen_tokens: Mutex<Vec<usize>>,
}

impl ScriptedModel {
    /// Script one-hot scores selecting each of `indices` in turn.
    pub fn new(
        indices: Vec<usize>,
        width: usize,
    ) -> Self {
        Self::from_scores(
            indices
                .into_iter()
                .map(|idx| one_hot_scores(idx, width))
                .collect(),
        )
    }

    /// Script raw score vectors.
    pub fn from_scores(scores: Vec<Vec<f32>>) -> Self {
        Self {
            scores,
            repeat_last: false,
            steps: AtomicUsize::new(0),
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    /// A model that selects `index` forever.
    pub fn repeating(
        index: usize,
        width: usize,
    ) -> Self {
        Self {
            repeat_last: true,
            ..Self::new(vec![index], width)
        }
    }

    /// The total number of steps run, across all calls.
    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::SeqCst)
    }

    /// The input token index of every step run, in call order.
    pub fn seen_tokens(&self) -> Vec<usize> {
        self.seen_tokens
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Seq2SeqModel for ScriptedModel {
    type State = usize;

    fn encode(
        &self,
        _sequence: &OneHotSequence,
    ) -> CSResult<Self::State> {
        Ok(0)
    }

    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>> {
        self.steps.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen_tokens.lock() {
            seen.push(token.index());
        }

        let scores = match self.scores.get(state) {
            Some(scores) => scores,
            None if self.repeat_last => self
                .scores
                .last()
                .ok_or_else(|| CSError::Inference("empty script".to_string()))?,
            None => {
                return Err(CSError::Inference(format!(
                    "script exhausted at step {state}"
                )));
            }
        };

        Ok(StepOutput::new(scores.clone(), state + 1))
    }
}

/// Wraps a model, failing the decoder step numbered `fail_at` (0-based, across all calls).
#[derive(Debug)]
pub struct FailingModel<M> {
    inner: M,
    fail_at: usize,
    steps: AtomicUsize,
}

impl<M: Seq2SeqModel> FailingModel<M> {
    /// Create a new failing wrapper.
    pub fn new(
        inner: M,
        fail_at: usize,
    ) -> Self {
        Self {
            inner,
            fail_at,
            steps: AtomicUsize::new(0),
        }
    }
}

impl<M: Seq2SeqModel> Seq2SeqModel for FailingModel<M> {
    type State = M::State;

    fn encode(
        &self,
        sequence: &OneHotSequence,
    ) -> CSResult<Self::State> {
        self.inner.encode(sequence)
    }

    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>> {
        let step = self.steps.fetch_add(1, Ordering::SeqCst);
        if step == self.fail_at {
            return Err(CSError::Io(std::io::Error::other(format!(
                "injected failure at step {step}"
            ))));
        }
        self.inner.step(token, state)
    }
}

/// Wraps a model, cancelling a token from inside the step numbered `cancel_at`.
///
/// Steps are counted from 1 across all calls; the step that cancels still
/// returns its output.
#[derive(Debug)]
pub struct CancellingModel<M> {
    inner: M,
    cancel: CancellationToken,
    cancel_at: usize,
    steps: AtomicUsize,
}

impl<M: Seq2SeqModel> CancellingModel<M> {
    /// Create a new cancelling wrapper.
    pub fn new(
        inner: M,
        cancel: CancellationToken,
        cancel_at: usize,
    ) -> Self {
        Self {
            inner,
            cancel,
            cancel_at,
            steps: AtomicUsize::new(0),
        }
    }

    /// The total number of steps run, across all calls.
    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::SeqCst)
    }
}

impl<M: Seq2SeqModel> Seq2SeqModel for CancellingModel<M> {
    type State = M::State;

    fn encode(
        &self,
        sequence: &OneHotSequence,
    ) -> CSResult<Self::State> {
        self.inner.encode(sequence)
    }

    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>> {
        let step = self.steps.fetch_add(1, Ordering::SeqCst) + 1;
        if step == self.cancel_at {
            self.cancel.cancel();
        }
        self.inner.step(token, state)
    }
}
