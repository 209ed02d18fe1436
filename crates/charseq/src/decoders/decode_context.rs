//! # Decode Context

use crate::{
    decoders::{DecodeOutcome, DecodeState},
    encoding::OneHotVector,
};

/// The per-call state of one greedy decode.
///
/// Owns the recurrent model state and the output buffer; advanced one token
/// at a time by [`GreedyDecoder::step`](crate::decoders::GreedyDecoder::step).
#[derive(Debug)]
pub struct DecodeContext<S> {
    /// The previous output token, one-hot; the start token before the first step.
    pub(crate) token: OneHotVector,

    /// The recurrent state; `None` after a failed step.
    pub(crate) state: Option<S>,

    /// Append buffer for decoded chars.
    pub(crate) buf: String,

    /// The number of chars in `buf`.
    pub(crate) emitted: usize,

    /// The number of model steps run.
    pub(crate) steps: usize,

    pub(crate) phase: DecodeState,
}

impl<S> DecodeContext<S> {
    pub(crate) fn new(
        start: OneHotVector,
        state: S,
        capacity: usize,
    ) -> Self {
        Self {
            token: start,
            state: Some(state),
            buf: String::with_capacity(capacity),
            emitted: 0,
            steps: 0,
            phase: DecodeState::Decoding,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> DecodeState {
        self.phase
    }

    /// Has the decode reached a terminal state?
    pub fn is_stopped(&self) -> bool {
        self.phase.is_stopped()
    }

    /// The text decoded so far.
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// The number of chars decoded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// The number of model steps run so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Finish the context.
    ///
    /// ## Returns
    /// `None` if the decode has not stopped.
    pub fn into_outcome(self) -> Option<DecodeOutcome> {
        match self.phase {
            DecodeState::Stopped(stop_reason) => Some(DecodeOutcome {
                text: self.buf,
                stop_reason,
                steps: self.steps,
            }),
            DecodeState::Decoding => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::StopReason;

    #[test]
    fn test_context() {
        let start = OneHotVector::new(0, 4).unwrap();
        let mut ctx = DecodeContext::new(start, (), 8);
        assert!(!ctx.is_stopped());
        assert_eq!(ctx.text(), "");
        assert_eq!(ctx.steps(), 0);

        ctx.buf.push('x');
        ctx.emitted += 1;
        ctx.steps += 1;
        assert_eq!(ctx.emitted(), 1);

        ctx.phase = DecodeState::Stopped(StopReason::StopToken);
        let outcome = ctx.into_outcome().unwrap();
        assert_eq!(outcome.text, "x");
        assert_eq!(outcome.steps, 1);
    }

    #[test]
    fn test_unfinished_context() {
        let start = OneHotVector::new(0, 2).unwrap();
        let ctx = DecodeContext::new(start, (), 0);
        assert!(ctx.into_outcome().is_none());
    }
}
