//! Loading key/value datasets into a trie.
//!
//! A dataset is a byte stream with one `key<delimiter>value` entry per line.
//! Keys and values are taken verbatim as bytes, so they need not be UTF-8.

use std::io::BufRead;

use crate::config::dataset::DatasetConfig;
use crate::config::Validate;
use crate::data_structures::NiihauTrie;
use crate::error::{NiihauError, NiihauResult};

/// A parsed key/value pair.
pub type Pair = (Vec<u8>, Vec<u8>);

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Parses every entry of a dataset.
///
/// The first occurrence of the delimiter splits a line into key and value, so
/// values may contain the delimiter. A trailing `\r` is dropped.
///
/// # Errors
///
/// * `NiihauError::Config` if the dataset configuration is invalid
/// * `NiihauError::Io` if reading fails
/// * `NiihauError::Parse` if an entry line has no delimiter
pub fn parse_pairs<R: BufRead>(reader: R, config: &DatasetConfig) -> NiihauResult<Vec<Pair>> {
    config.validate()?;
    let delimiter = config.delimiter.as_bytes();
    let mut pairs = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if config.skip_comments && (line.is_empty() || line.starts_with(b"#")) {
            continue;
        }

        let Some(split) = find(&line, delimiter) else {
            return Err(NiihauError::Parse {
                line: index + 1,
                message: format!("missing delimiter {:?}", config.delimiter),
            });
        };

        let value = line[split + delimiter.len()..].to_vec();
        line.truncate(split);
        pairs.push((line, value));
    }

    Ok(pairs)
}

/// Builds a trie from a dataset.
pub fn load_trie<R: BufRead>(reader: R, config: &DatasetConfig) -> NiihauResult<NiihauTrie> {
    let pairs = parse_pairs(reader, config)?;
    let entries = pairs.len();
    let trie: NiihauTrie = pairs.into_iter().collect();

    tracing::info!(entries, size = trie.size(), "Loaded dataset into trie");
    Ok(trie)
}
