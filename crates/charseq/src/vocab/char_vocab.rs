//! # Character Vocabulary

use crate::{
    errors::{CSError, CSResult},
    types::{CSHashMap, TokenType, hash_map_with_capacity, try_token_from_usize},
};

/// Bidirectional `char <-> index` vocabulary.
///
/// Immutable after construction; lookups are total and side-effect free.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CharVocab<T: TokenType> {
    char_to_index: CSHashMap<char, T>,
    index_to_char: CSHashMap<T, char>,
}

impl<T: TokenType> CharVocab<T> {
    /// Build a vocab from `(char, index)` pairs.
    ///
    /// Repeating an identical pair is allowed; mapping one char to two indices,
    /// or one index to two chars, is a [`CSError::VocabConflict`].
    ///
    /// ## Arguments
    /// * `pairs` - the `(char, index)` table.
    ///
    /// ## Returns
    /// A new `CharVocab` instance.
    pub fn from_pairs<I>(pairs: I) -> CSResult<Self>
    where
        I: IntoIterator<Item = (char, T)>,
    {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();

        let mut char_to_index: CSHashMap<char, T> = hash_map_with_capacity(lower);
        let mut index_to_char: CSHashMap<T, char> = hash_map_with_capacity(lower);

        for (c, idx) in pairs {
            if let Some(&prev) = char_to_index.get(&c)
                && prev != idx
            {
                return Err(CSError::VocabConflict(format!(
                    "char {c:?} mapped to both {prev} and {idx}"
                )));
            }
            if let Some(&prev) = index_to_char.get(&idx)
                && prev != c
            {
                return Err(CSError::VocabConflict(format!(
                    "index {idx} mapped to both {prev:?} and {c:?}"
                )));
            }
            char_to_index.insert(c, idx);
            index_to_char.insert(idx, c);
        }

        Ok(Self {
            char_to_index,
            index_to_char,
        })
    }

    /// Build a vocab assigning consecutive indices to `chars`, starting at `first_index`.
    ///
    /// ## Arguments
    /// * `chars` - the characters, in index order.
    /// * `first_index` - the index of the first character.
    pub fn from_ordered_chars<I>(
        chars: I,
        first_index: usize,
    ) -> CSResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let pairs = chars
            .into_iter()
            .enumerate()
            .map(|(offset, c)| Ok((c, try_token_from_usize::<T>(first_index + offset)?)))
            .collect::<CSResult<Vec<_>>>()?;
        Self::from_pairs(pairs)
    }

    /// Look up the index for a character.
    pub fn char_to_index(
        &self,
        c: char,
    ) -> Option<T> {
        self.char_to_index.get(&c).copied()
    }

    /// Look up the character for an index.
    pub fn index_to_char(
        &self,
        index: T,
    ) -> Option<char> {
        self.index_to_char.get(&index).copied()
    }

    /// Is the character in the vocab?
    pub fn contains_char(
        &self,
        c: char,
    ) -> bool {
        self.char_to_index.contains_key(&c)
    }

    /// Get the number of characters in the vocab.
    pub fn len(&self) -> usize {
        self.char_to_index.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The largest index in the vocab, if any.
    pub fn max_index(&self) -> Option<T> {
        self.index_to_char.keys().max().copied()
    }

    /// The one-hot width needed to address every index: `max_index + 1`.
    ///
    /// Sparse tables are wider than [`len`](Self::len).
    pub fn width(&self) -> usize {
        self.max_index()
            .and_then(|t| t.to_usize())
            .map_or(0, |m| m + 1)
    }

    /// The `(char, index)` pairs, sorted by index.
    pub fn pairs(&self) -> Vec<(char, T)> {
        let mut pairs: Vec<(char, T)> = self
            .char_to_index
            .iter()
            .map(|(&c, &t)| (c, t))
            .collect();
        pairs.sort_by_key(|&(c, t)| (t, c));
        pairs
    }

    /// Convert to a different index type.
    pub fn to_token_type<G: TokenType>(&self) -> CSResult<CharVocab<G>> {
        let pairs = self
            .pairs()
            .into_iter()
            .map(|(c, t)| {
                let t = t.to_usize().ok_or(CSError::TokenOutOfRange)?;
                Ok((c, try_token_from_usize::<G>(t)?))
            })
            .collect::<CSResult<Vec<_>>>()?;
        CharVocab::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_vocab() {
        type T = u32;
        let vocab: CharVocab<T> = CharVocab::from_pairs([('a', 2), ('b', 3), ('c', 7)]).unwrap();

        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());

        assert_eq!(vocab.char_to_index('a'), Some(2));
        assert_eq!(vocab.char_to_index('z'), None);
        assert_eq!(vocab.index_to_char(3), Some('b'));
        assert_eq!(vocab.index_to_char(4), None);

        assert!(vocab.contains_char('c'));
        assert!(!vocab.contains_char('d'));

        assert_eq!(vocab.max_index(), Some(7));
        assert_eq!(vocab.width(), 8);
        assert_eq!(vocab.pairs(), vec![('a', 2), ('b', 3), ('c', 7)]);
    }

    #[test]
    fn test_empty_vocab() {
        let vocab: CharVocab<u16> = CharVocab::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_index(), None);
        assert_eq!(vocab.width(), 0);
    }

    #[test]
    fn test_conflicts() {
        type T = u16;

        // Identical repeats are fine.
        let vocab: CharVocab<T> = CharVocab::from_pairs([('a', 2), ('a', 2)]).unwrap();
        assert_eq!(vocab.len(), 1);

        assert!(matches!(
            CharVocab::<T>::from_pairs([('a', 2), ('a', 3)]),
            Err(CSError::VocabConflict(_))
        ));
        assert!(matches!(
            CharVocab::<T>::from_pairs([('a', 2), ('b', 2)]),
            Err(CSError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_from_ordered_chars() {
        let vocab: CharVocab<u8> = CharVocab::from_ordered_chars("abc".chars(), 2).unwrap();
        assert_eq!(vocab.pairs(), vec![('a', 2), ('b', 3), ('c', 4)]);

        assert!(matches!(
            CharVocab::<u8>::from_ordered_chars("ab".chars(), 255),
            Err(CSError::TokenOutOfRange)
        ));
    }

    #[test]
    fn test_to_token_type() {
        let vocab: CharVocab<u32> = CharVocab::from_pairs([('x', 300), ('y', 2)]).unwrap();

        let wide: CharVocab<u16> = vocab.to_token_type().unwrap();
        assert_eq!(wide.char_to_index('x'), Some(300));

        assert!(vocab.to_token_type::<u8>().is_err());
    }
}
