//! # Decode Results

/// Why a decode stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The model emitted the stop token.
    StopToken,

    /// The output reached the configured maximum length.
    ///
    /// The text is a best-effort truncation, not an error.
    MaxLength,
}

/// The phase of a [`DecodeContext`](crate::decoders::DecodeContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// More steps are needed.
    Decoding,

    /// Terminal.
    Stopped(StopReason),
}

impl DecodeState {
    /// Is this the terminal state?
    pub fn is_stopped(&self) -> bool {
        matches!(self, DecodeState::Stopped(_))
    }
}

/// The result of a completed decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// The decoded text; never contains the stop token.
    pub text: String,

    /// Why the decode stopped.
    pub stop_reason: StopReason,

    /// The number of decoder steps run.
    pub steps: usize,
}

impl DecodeOutcome {
    /// Was the output cut off at the length bound?
    pub fn is_truncated(&self) -> bool {
        self.stop_reason == StopReason::MaxLength
    }
}
