//! # JSON Vocabulary IO

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::{CSError, CSResult},
    types::TokenType,
    vocab::CharVocab,
};

/// Take the first char of a table entry.
///
/// Multi-char entries are truncated; empty entries are skipped.
fn first_char(
    entry: &str,
    context: &str,
) -> Option<char> {
    let mut chars = entry.chars();
    let c = chars.next();
    let truncated = chars.next().is_some();
    match c {
        None => log::warn!("skipping empty {context} entry"),
        Some(c) if truncated => log::warn!("truncating {context} entry {entry:?} to {c:?}"),
        _ => {}
    }
    c
}

fn token_from_u64<T: TokenType>(value: u64) -> CSResult<T> {
    T::from_u64(value).ok_or(CSError::TokenOutOfRange)
}

/// Read a `char -> index` JSON table.
///
/// ## Arguments
/// * `reader` - the JSON source.
pub fn read_char_to_index_json<T, R>(reader: R) -> CSResult<CharVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let table: BTreeMap<String, u64> = serde_json::from_reader(reader)?;

    let mut pairs = Vec::with_capacity(table.len());
    for (key, idx) in table {
        if let Some(c) = first_char(&key, "char-to-index") {
            pairs.push((c, token_from_u64::<T>(idx)?));
        }
    }

    CharVocab::from_pairs(pairs)
}

/// Read an `index -> char` JSON table.
///
/// Keys must parse as unsigned integers.
///
/// ## Arguments
/// * `reader` - the JSON source.
pub fn read_index_to_char_json<T, R>(reader: R) -> CSResult<CharVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let table: BTreeMap<String, String> = serde_json::from_reader(reader)?;

    let mut pairs = Vec::with_capacity(table.len());
    for (key, value) in table {
        let idx: u64 = key
            .trim()
            .parse()
            .map_err(|e| CSError::Parse(format!("index key {key:?}: {e}")))?;
        if let Some(c) = first_char(&value, "index-to-char") {
            pairs.push((c, token_from_u64::<T>(idx)?));
        }
    }

    CharVocab::from_pairs(pairs)
}

/// Load a `char -> index` JSON table from a file.
///
/// ## Arguments
/// * `path` - the path to the table.
pub fn load_char_to_index_json_path<T, P>(path: P) -> CSResult<CharVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = read_char_to_index_json(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} source chars from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Load an `index -> char` JSON table from a file.
///
/// ## Arguments
/// * `path` - the path to the table.
pub fn load_index_to_char_json_path<T, P>(path: P) -> CSResult<CharVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = read_index_to_char_json(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} target chars from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Write a vocab as a `char -> index` JSON table.
pub fn write_char_to_index_json<T, W>(
    vocab: &CharVocab<T>,
    writer: W,
) -> CSResult<()>
where
    T: TokenType,
    W: Write,
{
    let table = vocab
        .pairs()
        .into_iter()
        .map(|(c, t)| {
            let t = t.to_u64().ok_or(CSError::TokenOutOfRange)?;
            Ok((c.to_string(), t))
        })
        .collect::<CSResult<BTreeMap<String, u64>>>()?;
    serde_json::to_writer_pretty(writer, &table)?;
    Ok(())
}

/// Write a vocab as an `index -> char` JSON table.
pub fn write_index_to_char_json<T, W>(
    vocab: &CharVocab<T>,
    writer: W,
) -> CSResult<()>
where
    T: TokenType,
    W: Write,
{
    let table: BTreeMap<String, String> = vocab
        .pairs()
        .into_iter()
        .map(|(c, t)| (t.to_string(), c.to_string()))
        .collect();
    serde_json::to_writer_pretty(writer, &table)?;
    Ok(())
}

/// Save a vocab to a file as a `char -> index` JSON table.
pub fn save_char_to_index_json_path<T, P>(
    vocab: &CharVocab<T>,
    path: P,
) -> CSResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_char_to_index_json(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a vocab to a file as an `index -> char` JSON table.
pub fn save_index_to_char_json_path<T, P>(
    vocab: &CharVocab<T>,
    path: P,
) -> CSResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_index_to_char_json(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}
