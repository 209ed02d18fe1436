//! # Reserved Decoder Tokens

use crate::{
    errors::{CSError, CSResult},
    types::TokenType,
};

/// The reserved start/stop indices of the target vocabulary.
///
/// The decoder is primed with the start token; emitting the stop token
/// ends the decode and is never written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTokens<T: TokenType> {
    /// The start-of-sequence index fed to the first decoder step.
    pub start: T,

    /// The end-of-sequence index.
    pub stop: T,
}

impl<T: TokenType> Default for SpecialTokens<T> {
    /// Start at `0`, stop at `1`.
    fn default() -> Self {
        Self {
            start: T::zero(),
            stop: T::one(),
        }
    }
}

impl<T: TokenType> SpecialTokens<T> {
    /// Create a new pair of special tokens.
    pub fn new(
        start: T,
        stop: T,
    ) -> Self {
        Self { start, stop }
    }

    /// Is `token` the stop token?
    pub fn is_stop(
        &self,
        token: T,
    ) -> bool {
        token == self.stop
    }

    /// Validate that start and stop are distinct.
    pub fn validate(&self) -> CSResult<()> {
        if self.start == self.stop {
            return Err(CSError::InvalidConfig(format!(
                "start and stop tokens must differ (both {})",
                self.start
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let specials: SpecialTokens<u32> = SpecialTokens::default();
        assert_eq!(specials.start, 0);
        assert_eq!(specials.stop, 1);
        assert!(specials.is_stop(1));
        assert!(!specials.is_stop(0));
        specials.validate().unwrap();
    }

    #[test]
    fn test_validate() {
        assert!(SpecialTokens::<u16>::new(5, 5).validate().is_err());
        SpecialTokens::<u16>::new(5, 6).validate().unwrap();
    }
}
