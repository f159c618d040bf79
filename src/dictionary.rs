//! Word lists for the ladder search.
//!
//! A [`Dictionary`] is built once and then only read. Loading from a file or
//! the bundled list applies the Weaver filters (target length, no proper
//! nouns); [`Dictionary::from_words`] takes a list verbatim.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::DictionaryError;

const EMBEDDED_WORDS: &str = include_str!("../dictionary/four_letter_words.txt");

/// An immutable, ordered collection of words.
///
/// Iteration order is preserved from the source and determines the order in
/// which neighbors are offered to the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Use the given words as-is. Duplicates and mixed lengths are kept.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a line-oriented word list, keeping lines of `word_length`
    /// characters that do not start with an uppercase letter.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if is_playable(word, word_length) {
                words.push(word.to_string());
            }
        }
        Ok(Self { words })
    }

    pub fn from_path(path: impl AsRef<Path>, word_length: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary =
            Self::from_reader(BufReader::new(file), word_length).map_err(|err| match err {
                DictionaryError::Read(source) => DictionaryError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        debug!(
            path = %path.display(),
            words = dictionary.len(),
            word_length,
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// The bundled list of official four-letter Weaver words.
    pub fn embedded() -> Self {
        let words: Vec<String> = EMBEDDED_WORDS
            .lines()
            .map(str::trim)
            .filter(|w| is_playable(w, crate::DEFAULT_WORD_LENGTH))
            .map(str::to_string)
            .collect();
        debug!(words = words.len(), "loaded embedded dictionary");
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length of the first word, if any. Informational only; the dictionary
    /// does not enforce a single length.
    pub fn word_length(&self) -> Option<usize> {
        self.words.first().map(|w| w.chars().count())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn is_playable(word: &str, word_length: usize) -> bool {
    match word.chars().next() {
        Some(first) => !first.is_uppercase() && word.chars().count() == word_length,
        None => false,
    }
}

/// Collect every line of exactly `word_length` characters from a raw word
/// list, such as `/usr/share/dict/words`.
///
/// Unlike [`Dictionary::from_reader`], proper nouns are kept; this produces a
/// source file rather than a playable dictionary.
pub fn extract_word_list<R: BufRead>(
    reader: R,
    word_length: usize,
) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.chars().count() == word_length {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Write one word per line.
pub fn write_word_list<W: Write>(mut writer: W, words: &[String]) -> Result<(), DictionaryError> {
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;
    Ok(())
}
