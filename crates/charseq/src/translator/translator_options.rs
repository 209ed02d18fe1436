//! # Translator Options

use crate::{
    errors::{CSError, CSResult},
    types::TokenType,
    vocab::SpecialTokens,
};

/// The default output length bound.
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 87;

/// Options for configuring a [`Translator`](crate::translator::Translator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TranslatorOptions<T: TokenType> {
    /// The maximum number of decoded chars per call.
    ///
    /// Bounds decodes whose model never emits the stop token.
    pub max_output_len: usize,

    /// The reserved start/stop tokens of the target vocab.
    pub special_tokens: SpecialTokens<T>,
}

impl<T: TokenType> Default for TranslatorOptions<T> {
    fn default() -> Self {
        Self {
            max_output_len: DEFAULT_MAX_OUTPUT_LEN,
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl<T: TokenType> TranslatorOptions<T> {
    /// Gets the configured output length bound.
    pub fn max_output_len(&self) -> usize {
        self.max_output_len
    }

    /// Sets the configured output length bound.
    pub fn set_max_output_len(
        &mut self,
        max_output_len: usize,
    ) {
        self.max_output_len = max_output_len;
    }

    /// Sets the configured output length bound and returns the options.
    pub fn with_max_output_len(
        mut self,
        max_output_len: usize,
    ) -> Self {
        self.set_max_output_len(max_output_len);
        self
    }

    /// Gets the configured special tokens.
    pub fn special_tokens(&self) -> SpecialTokens<T> {
        self.special_tokens
    }

    /// Sets the configured special tokens.
    pub fn set_special_tokens(
        &mut self,
        special_tokens: SpecialTokens<T>,
    ) {
        self.special_tokens = special_tokens;
    }

    /// Sets the configured special tokens and returns the options.
    pub fn with_special_tokens(
        mut self,
        special_tokens: SpecialTokens<T>,
    ) -> Self {
        self.set_special_tokens(special_tokens);
        self
    }

    /// Check the options.
    ///
    /// ## Returns
    /// [`CSError::InvalidConfig`] for a zero length bound,
    /// or identical start/stop tokens.
    pub fn validate(&self) -> CSResult<()> {
        if self.max_output_len == 0 {
            return Err(CSError::InvalidConfig(
                "max_output_len must be > 0".to_string(),
            ));
        }
        self.special_tokens.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options: TranslatorOptions<u32> = TranslatorOptions::default();
        assert_eq!(options.max_output_len(), DEFAULT_MAX_OUTPUT_LEN);
        assert_eq!(options.special_tokens(), SpecialTokens::new(0, 1));
        options.validate().unwrap();
    }

    #[test]
    fn test_builders() {
        let options = TranslatorOptions::<u16>::default()
            .with_max_output_len(12)
            .with_special_tokens(SpecialTokens::new(3, 4));
        assert_eq!(options.max_output_len(), 12);
        assert_eq!(options.special_tokens().stop, 4);

        assert!(options.with_max_output_len(0).validate().is_err());
        assert!(
            options
                .with_special_tokens(SpecialTokens::new(2, 2))
                .validate()
                .is_err()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let options: TranslatorOptions<u32> =
            serde_json::from_str(r#"{"max_output_len": 20}"#).unwrap();
        assert_eq!(options.max_output_len(), 20);
        assert_eq!(options.special_tokens(), SpecialTokens::default());

        let json = serde_json::to_string(&options).unwrap();
        let back: TranslatorOptions<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
