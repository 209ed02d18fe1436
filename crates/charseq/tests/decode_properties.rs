#![allow(missing_docs)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use charseq::{
    CSResult,
    CharVocab,
    GreedyDecoder,
    Seq2SeqModel,
    SpecialTokens,
    StepOutput,
    StopReason,
    TextTranslator,
    Translator,
    TranslatorOptions,
    encoding::{OneHotSequence, OneHotVector, encode_indices, filter_known, one_hot_encode},
    model::TransitionTableModel,
};
use proptest::prelude::*;

type T = u32;

const SOURCE_CHARS: &str = "abcdefghijklmnopqrstuvwxyzáéíóúñü ,.?!¿¡";

fn source_vocab() -> CharVocab<T> {
    CharVocab::from_ordered_chars(SOURCE_CHARS.chars(), 2).unwrap()
}

/// Emits the same scores on every step, counting steps.
struct ConstantScores {
    scores: Vec<f32>,
    steps: AtomicUsize,
}

impl ConstantScores {
    fn selecting(
        index: usize,
        width: usize,
    ) -> Self {
        let mut scores = vec![0.0; width];
        scores[index] = 1.0;
        Self {
            scores,
            steps: AtomicUsize::new(0),
        }
    }
}

impl Seq2SeqModel for ConstantScores {
    type State = ();

    fn encode(
        &self,
        _sequence: &OneHotSequence,
    ) -> CSResult<()> {
        Ok(())
    }

    fn step(
        &self,
        _token: &OneHotVector,
        state: (),
    ) -> CSResult<StepOutput<()>> {
        self.steps.fetch_add(1, Ordering::SeqCst);
        Ok(StepOutput::new(self.scores.clone(), state))
    }
}

#[test]
fn test_stop_first_step() {
    let target = Arc::new(source_vocab());
    let decoder = GreedyDecoder::new(target.clone(), SpecialTokens::default(), 50).unwrap();
    let model = ConstantScores::selecting(1, decoder.width());

    let outcome = decoder.decode(&model, (), None).unwrap();
    assert_eq!(outcome.text, "");
    assert_eq!(outcome.stop_reason, StopReason::StopToken);
    assert_eq!(outcome.steps, 1);
    assert_eq!(model.steps.load(Ordering::SeqCst), 1);
}

#[test]
fn test_never_stops() {
    let target = Arc::new(source_vocab());
    for max_len in [1, 2, 17, 87] {
        let decoder = GreedyDecoder::new(target.clone(), SpecialTokens::default(), max_len).unwrap();
        let model = ConstantScores::selecting(2, decoder.width());

        let outcome = decoder.decode(&model, (), None).unwrap();
        assert_eq!(outcome.text, "a".repeat(max_len));
        assert_eq!(outcome.stop_reason, StopReason::MaxLength);
        assert_eq!(model.steps.load(Ordering::SeqCst), max_len);
    }
}

#[test]
fn test_tie_break_lowest_index() {
    let target = Arc::new(source_vocab());
    let decoder = GreedyDecoder::new(target, SpecialTokens::default(), 1).unwrap();

    let mut scores = vec![0.0; decoder.width()];
    scores[4] = 0.5;
    scores[9] = 0.5;
    let model = ConstantScores {
        scores,
        steps: AtomicUsize::new(0),
    };

    // Index 4 is 'c'; index 9 is 'h'.
    assert_eq!(decoder.decode(&model, (), None).unwrap().text, "c");
}

#[test]
fn test_ab_scenario() {
    let vocab: Arc<CharVocab<T>> = Arc::new(CharVocab::from_pairs([('a', 2), ('b', 3)]).unwrap());
    let model = TransitionTableModel::new([(2, 3), (3, 1)], 1).unwrap();
    let translator =
        Translator::new(vocab.clone(), vocab, model, TranslatorOptions::default()).unwrap();

    assert_eq!(translator.try_translate("a").unwrap().as_deref(), Some("b"));
    assert_eq!(translator.try_translate("").unwrap(), None);
}

proptest! {
    #[test]
    fn prop_filter_then_decode_is_identity(text in "[a-zñ ,.?!¿¡]{0,40}") {
        let vocab = source_vocab();

        let decoded: String = encode_indices(&vocab, &text)
            .into_iter()
            .map(|idx| vocab.index_to_char(idx).unwrap())
            .collect();

        prop_assert_eq!(&decoded, &text);
        prop_assert_eq!(filter_known(&vocab, &text), text);
    }

    #[test]
    fn prop_unknown_chars_are_dropped(text in "\\PC{0,40}") {
        let vocab = source_vocab();
        let filtered = filter_known(&vocab, &text);

        prop_assert!(filtered.chars().all(|c| vocab.contains_char(c)));
        prop_assert_eq!(
            filtered.chars().count(),
            text.chars().filter(|&c| vocab.contains_char(c)).count()
        );

        match one_hot_encode(&vocab, &text).unwrap() {
            None => prop_assert!(filtered.is_empty()),
            Some(seq) => {
                prop_assert_eq!(seq.len(), filtered.chars().count());
                for (row, &idx) in seq.rows().zip(seq.indices()) {
                    prop_assert_eq!(row.len(), vocab.width());
                    prop_assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
                    prop_assert_eq!(row[idx], 1.0);
                }
            }
        }
    }

    #[test]
    fn prop_decode_never_exceeds_bound(max_len in 1usize..64, index in 1usize..42) {
        let target = Arc::new(source_vocab());
        let decoder = GreedyDecoder::new(target, SpecialTokens::default(), max_len).unwrap();
        let model = ConstantScores::selecting(index, decoder.width());

        let outcome = decoder.decode(&model, (), None).unwrap();
        prop_assert!(outcome.text.chars().count() <= max_len);
        if index == 1 {
            prop_assert_eq!(outcome.stop_reason, StopReason::StopToken);
        } else {
            prop_assert_eq!(outcome.stop_reason, StopReason::MaxLength);
        }
    }
}
