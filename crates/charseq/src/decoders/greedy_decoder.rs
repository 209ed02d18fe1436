//! # Greedy Autoregressive Decoder

use std::sync::Arc;

use crate::{
    decoders::{
        CancellationToken,
        DecodeContext,
        DecodeOutcome,
        DecodeState,
        StopReason,
        argmax::argmax,
    },
    encoding::OneHotVector,
    errors::{CSError, CSResult, into_inference_error},
    model::{Seq2SeqModel, StepOutput},
    types::TokenType,
    vocab::{CharVocab, SpecialTokens},
};

/// Greedy (argmax) decoder over a target [`CharVocab`].
///
/// Each step feeds the previous token and state to the model, picks the
/// argmax of the returned scores, and either stops (stop token) or appends
/// the matching char. Output is capped at `max_output_len` chars.
#[derive(Debug, Clone)]
pub struct GreedyDecoder<T: TokenType> {
    target: Arc<CharVocab<T>>,
    specials: SpecialTokens<T>,
    max_output_len: usize,
    width: usize,
}

impl<T: TokenType> GreedyDecoder<T> {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `target` - the `index -> char` vocab of the decoder.
    /// * `specials` - the start/stop tokens.
    /// * `max_output_len` - the output length bound; must be `> 0`.
    ///
    /// ## Returns
    /// A new `GreedyDecoder`, or [`CSError::InvalidConfig`].
    pub fn new(
        target: Arc<CharVocab<T>>,
        specials: SpecialTokens<T>,
        max_output_len: usize,
    ) -> CSResult<Self> {
        specials.validate()?;
        if max_output_len == 0 {
            return Err(CSError::InvalidConfig(
                "max_output_len must be > 0".to_string(),
            ));
        }

        let start = specials.start.to_usize().ok_or(CSError::TokenOutOfRange)?;
        let stop = specials.stop.to_usize().ok_or(CSError::TokenOutOfRange)?;
        let width = target.width().max(start + 1).max(stop + 1);

        Ok(Self {
            target,
            specials,
            max_output_len,
            width,
        })
    }

    /// The target vocab.
    pub fn target(&self) -> &Arc<CharVocab<T>> {
        &self.target
    }

    /// The start/stop tokens.
    pub fn specials(&self) -> SpecialTokens<T> {
        self.specials
    }

    /// The output length bound.
    pub fn max_output_len(&self) -> usize {
        self.max_output_len
    }

    /// The width of the one-hot tokens fed to the model.
    ///
    /// Wide enough for every target index and both special tokens.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Start a decode from an encoder state.
    pub fn start<S>(
        &self,
        state: S,
    ) -> CSResult<DecodeContext<S>> {
        let start = self
            .specials
            .start
            .to_usize()
            .ok_or(CSError::TokenOutOfRange)?;
        Ok(DecodeContext::new(
            OneHotVector::new(start, self.width)?,
            state,
            self.max_output_len,
        ))
    }

    /// Advance a decode by one model step.
    ///
    /// Stopped contexts are returned unchanged.
    ///
    /// ## Returns
    /// The phase after the step.
    pub fn step<M: Seq2SeqModel>(
        &self,
        model: &M,
        ctx: &mut DecodeContext<M::State>,
    ) -> CSResult<DecodeState> {
        if ctx.is_stopped() {
            return Ok(ctx.phase);
        }

        let state = ctx.state.take().ok_or_else(|| {
            CSError::Inference("decode context was poisoned by an earlier failure".to_string())
        })?;

        let StepOutput { probs, state } = model.step(&ctx.token, state).map_err(into_inference_error)?;
        ctx.steps += 1;

        let next = argmax(&probs).ok_or_else(|| {
            CSError::Inference(format!(
                "step {} produced no selectable score ({} values)",
                ctx.steps,
                probs.len()
            ))
        })?;
        let token = T::from_usize(next).ok_or_else(|| {
            CSError::Inference(format!("step {} selected out-of-range index {next}", ctx.steps))
        })?;

        log::trace!("step {}: selected index {next}", ctx.steps);

        if self.specials.is_stop(token) {
            ctx.phase = DecodeState::Stopped(StopReason::StopToken);
            return Ok(ctx.phase);
        }

        let c = self.target.index_to_char(token).ok_or_else(|| {
            CSError::Inference(format!(
                "step {} selected index {next}, which is not in the target vocab",
                ctx.steps
            ))
        })?;
        ctx.buf.push(c);
        ctx.emitted += 1;

        if ctx.emitted >= self.max_output_len {
            ctx.phase = DecodeState::Stopped(StopReason::MaxLength);
            return Ok(ctx.phase);
        }

        ctx.token.set_index(next)?;
        ctx.state = Some(state);
        Ok(ctx.phase)
    }

    /// Run a decode to completion.
    ///
    /// ## Arguments
    /// * `model` - the decoder half of the model.
    /// * `state` - the encoder output.
    /// * `cancel` - checked before every model step.
    ///
    /// ## Returns
    /// The outcome; or [`CSError::Inference`] if any step fails,
    /// or [`CSError::Cancelled`]. No partial output is returned on error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode<M: Seq2SeqModel>(
        &self,
        model: &M,
        state: M::State,
        cancel: Option<&CancellationToken>,
    ) -> CSResult<DecodeOutcome> {
        let mut ctx = self.start(state)?;

        loop {
            if let Some(cancel) = cancel
                && cancel.is_cancelled()
            {
                log::debug!("decode cancelled after {} steps", ctx.steps());
                return Err(CSError::Cancelled);
            }

            if let DecodeState::Stopped(reason) = self.step(model, &mut ctx)? {
                if reason == StopReason::MaxLength {
                    log::debug!("decode truncated at {} chars", self.max_output_len);
                }
                break;
            }
        }

        ctx.into_outcome().ok_or_else(|| {
            CSError::Inference("decode loop exited before stopping".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CancellingModel, FailingModel, ScriptedModel, assert_send_sync};

    fn test_decoder(max_output_len: usize) -> GreedyDecoder<u32> {
        let target: CharVocab<u32> = CharVocab::from_pairs([('a', 2), ('b', 3)]).unwrap();
        GreedyDecoder::new(target.into(), SpecialTokens::default(), max_output_len).unwrap()
    }

    #[test]
    fn test_config() {
        let decoder = test_decoder(5);
        assert_send_sync(&decoder);
        assert_eq!(decoder.width(), 4);
        assert_eq!(decoder.max_output_len(), 5);

        let target: Arc<CharVocab<u32>> = Arc::new(CharVocab::default());
        assert!(matches!(
            GreedyDecoder::new(target.clone(), SpecialTokens::default(), 0),
            Err(CSError::InvalidConfig(_))
        ));
        assert!(matches!(
            GreedyDecoder::new(target.clone(), SpecialTokens::new(1, 1), 4),
            Err(CSError::InvalidConfig(_))
        ));

        // Specials outside the vocab still widen the one-hot tokens.
        let decoder = GreedyDecoder::new(target, SpecialTokens::new(6, 9), 4).unwrap();
        assert_eq!(decoder.width(), 10);
    }

    #[test]
    fn test_immediate_stop() {
        let decoder = test_decoder(10);
        let model = ScriptedModel::new(vec![1], 4);

        let outcome = decoder.decode(&model, 0, None).unwrap();
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.stop_reason, StopReason::StopToken);
        assert_eq!(outcome.steps, 1);
        assert_eq!(model.steps(), 1);
    }

    #[test]
    fn test_max_length() {
        let decoder = test_decoder(7);
        let model = ScriptedModel::repeating(2, 4);

        let outcome = decoder.decode(&model, 0, None).unwrap();
        assert_eq!(outcome.text, "aaaaaaa");
        assert_eq!(outcome.stop_reason, StopReason::MaxLength);
        assert!(outcome.is_truncated());
        assert_eq!(outcome.steps, 7);
    }

    #[test]
    fn test_feeds_previous_token() {
        let decoder = test_decoder(10);
        let model = ScriptedModel::new(vec![2, 3, 2, 1], 4);

        let outcome = decoder.decode(&model, 0, None).unwrap();
        assert_eq!(outcome.text, "aba");
        assert_eq!(model.seen_tokens(), vec![0, 2, 3, 2]);
    }

    #[test]
    fn test_stepwise() {
        let decoder = test_decoder(10);
        let model = ScriptedModel::new(vec![3, 1], 4);

        let mut ctx = decoder.start(0).unwrap();
        assert_eq!(decoder.step(&model, &mut ctx).unwrap(), DecodeState::Decoding);
        assert_eq!(ctx.text(), "b");
        assert_eq!(
            decoder.step(&model, &mut ctx).unwrap(),
            DecodeState::Stopped(StopReason::StopToken)
        );

        // Stopped contexts do not call the model again.
        assert_eq!(
            decoder.step(&model, &mut ctx).unwrap(),
            DecodeState::Stopped(StopReason::StopToken)
        );
        assert_eq!(model.steps(), 2);
    }

    #[test]
    fn test_cancelled() {
        let decoder = test_decoder(10);
        let model = ScriptedModel::repeating(2, 4);

        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(
            decoder.decode(&model, 0, Some(&cancel)),
            Err(CSError::Cancelled)
        ));
        assert_eq!(model.steps(), 0);
    }

    #[test]
    fn test_cancelled_mid_decode() {
        let decoder = test_decoder(50);

        for cancel_at in [1, 3, 10] {
            let cancel = CancellationToken::new();
            let model =
                CancellingModel::new(ScriptedModel::repeating(2, 4), cancel.clone(), cancel_at);

            assert!(matches!(
                decoder.decode(&model, 0, Some(&cancel)),
                Err(CSError::Cancelled)
            ));
            assert_eq!(model.steps(), cancel_at);
        }

        // Without the token passed in, the same model decodes to the bound.
        let cancel = CancellationToken::new();
        let model = CancellingModel::new(ScriptedModel::repeating(2, 4), cancel, 3);
        let outcome = decoder.decode(&model, 0, None).unwrap();
        assert_eq!(outcome.text.len(), 50);
        assert_eq!(model.steps(), 50);
    }

    #[test]
    fn test_model_failure() {
        let decoder = test_decoder(10);
        let model = FailingModel::new(ScriptedModel::repeating(2, 4), 3);

        assert!(matches!(
            decoder.decode(&model, 0, None),
            Err(CSError::Inference(_))
        ));
    }

    #[test]
    fn test_poisoned_context() {
        let decoder = test_decoder(10);
        let model = FailingModel::new(ScriptedModel::repeating(2, 4), 0);

        let mut ctx = decoder.start(0).unwrap();
        assert!(decoder.step(&model, &mut ctx).is_err());
        assert!(matches!(
            decoder.step(&model, &mut ctx),
            Err(CSError::Inference(_))
        ));
    }

    #[test]
    fn test_unknown_index() {
        let decoder = test_decoder(10);

        // Index 5 is neither stop nor in the target vocab.
        let model = ScriptedModel::new(vec![2, 5], 6);
        assert!(matches!(
            decoder.decode(&model, 0, None),
            Err(CSError::Inference(_))
        ));
    }

    #[test]
    fn test_empty_scores() {
        let decoder = test_decoder(10);
        let model = ScriptedModel::new(vec![2], 0);
        assert!(matches!(
            decoder.decode(&model, 0, None),
            Err(CSError::Inference(_))
        ));
    }

    #[test]
    fn test_tie_break() {
        let decoder = test_decoder(10);

        // Equal maxima at 2 and 3: the lower index wins.
        let model = ScriptedModel::from_scores(vec![vec![0.0, 0.0, 0.5, 0.5], vec![0.0, 0.9, 0.0, 0.0]]);

        let outcome = decoder.decode(&model, 0, None).unwrap();
        assert_eq!(outcome.text, "a");
    }
}
