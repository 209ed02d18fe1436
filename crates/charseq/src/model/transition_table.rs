//! # Transition Table Model

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    encoding::{OneHotSequence, OneHotVector},
    errors::{CSError, CSResult},
    model::{Seq2SeqModel, StepOutput},
    types::{CSHashMap, hash_map_with_capacity},
};

/// The largest index a transition table may name.
///
/// Every step allocates a score vector this wide at most.
pub const MAX_TRANSITION_INDEX: usize = (1 << 20) - 1;

fn check_index(
    index: usize,
    role: &str,
) -> CSResult<usize> {
    if index > MAX_TRANSITION_INDEX {
        return Err(CSError::InvalidConfig(format!(
            "transition {role} index {index} exceeds {MAX_TRANSITION_INDEX}"
        )));
    }
    Ok(index)
}

/// A deterministic [`Seq2SeqModel`] driven by a `token -> next token` table.
///
/// The encoder remembers the last source index; the first decoder step looks
/// that index up in place of the start token. Every later step looks up the
/// previous output token. Tokens with no transition emit `stop`.
///
/// The table format is a JSON object of index strings: `{"2": 3, "3": 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTableModel {
    transitions: CSHashMap<usize, usize>,
    stop: usize,
    width: usize,
}

impl TransitionTableModel {
    /// Create a new table model.
    ///
    /// ## Arguments
    /// * `transitions` - the `(from, to)` pairs.
    /// * `stop` - the index emitted when no transition matches.
    ///
    /// ## Returns
    /// The model, or [`CSError::InvalidConfig`] if any index exceeds
    /// [`MAX_TRANSITION_INDEX`].
    pub fn new<I>(
        transitions: I,
        stop: usize,
    ) -> CSResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let transitions = transitions.into_iter();
        let mut table: CSHashMap<usize, usize> = hash_map_with_capacity(transitions.size_hint().0);
        let mut max_index = check_index(stop, "stop")?;
        for (from, to) in transitions {
            max_index = max_index
                .max(check_index(from, "source")?)
                .max(check_index(to, "target")?);
            table.insert(from, to);
        }
        Ok(Self {
            transitions: table,
            stop,
            width: max_index + 1,
        })
    }

    /// Read a table from JSON.
    pub fn read_json<R: Read>(
        reader: R,
        stop: usize,
    ) -> CSResult<Self> {
        let table: BTreeMap<String, usize> = serde_json::from_reader(reader)?;
        let pairs = table
            .into_iter()
            .map(|(key, to)| {
                key.trim()
                    .parse::<usize>()
                    .map(|from| (from, to))
                    .map_err(|e| CSError::Parse(format!("transition key {key:?}: {e}")))
            })
            .collect::<CSResult<Vec<_>>>()?;
        Self::new(pairs, stop)
    }

    /// Load a table from a JSON file.
    pub fn load_json_path<P: AsRef<Path>>(
        path: P,
        stop: usize,
    ) -> CSResult<Self> {
        Self::read_json(BufReader::new(File::open(path)?), stop)
    }

    /// The width of the emitted score vectors.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The transition for `from`, if any.
    pub fn next_index(
        &self,
        from: usize,
    ) -> usize {
        self.transitions.get(&from).copied().unwrap_or(self.stop)
    }
}

impl Seq2SeqModel for TransitionTableModel {
    /// The pending source index, consumed by the first step.
    type State = Option<usize>;

    fn encode(
        &self,
        sequence: &OneHotSequence,
    ) -> CSResult<Self::State> {
        Ok(sequence.indices().last().copied())
    }

    fn step(
        &self,
        token: &OneHotVector,
        state: Self::State,
    ) -> CSResult<StepOutput<Self::State>> {
        let from = state.unwrap_or(token.index());
        let mut probs = vec![0.0; self.width.max(token.width())];
        probs[self.next_index(from)] = 1.0;
        Ok(StepOutput::new(probs, None))
    }
}
