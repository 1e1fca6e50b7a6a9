//! The word list the solver draws candidates from.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CryptogramError, Result};
use crate::pattern::Pattern;

/// Words used when no word list can be read.
pub const FALLBACK_WORDS: &[&str] = &[
    "THIS",
    "IS",
    "A",
    "TEST",
    "EXAMPLE",
    "CRYPTOGRAM",
    "HAS",
    "NO",
    "SOLUTION",
];

/// What the solver needs from a word store: membership and lookup of
/// candidates of a given length.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;

    /// Every word with `len` characters, in the store's iteration order.
    fn words_of_length(&self, len: usize) -> Vec<&str>;

    /// Words with the same character-repetition shape as `token`, in the same
    /// relative order as `words_of_length`.
    fn words_matching(&self, token: &str) -> Vec<&str> {
        let pattern = Pattern::of(token);
        self.words_of_length(token.chars().count())
            .into_iter()
            .filter(|word| Pattern::of(word) == pattern)
            .collect()
    }
}

/// An immutable set of uppercase words, kept in load order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<String>,
    members: HashSet<String>,
    by_length: HashMap<usize, Vec<usize>>,
    by_pattern: HashMap<Pattern, Vec<usize>>,
}

impl Lexicon {
    /// Builds a lexicon from in-memory words. Entries are trimmed and
    /// uppercased; blanks and repeats are dropped, first occurrence wins.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::default();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Reads a newline-delimited word list, or fails with
    /// [`CryptogramError::WordSourceUnavailable`].
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CryptogramError::word_source(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|e| CryptogramError::word_source(path, e))?;

        let lexicon = Self::from_words(lines);
        info!(path = %path.display(), words = lexicon.len(), "loaded word list");
        Ok(lexicon)
    }

    /// Like [`Lexicon::try_load`], but substitutes [`FALLBACK_WORDS`] when
    /// the word list cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("{}; using the built-in word list", e);
                Self::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_uppercase();
        if word.is_empty() || self.members.contains(&word) {
            return;
        }

        let id = self.words.len();
        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(id);
        self.by_pattern.entry(Pattern::of(&word)).or_default().push(id);
        self.members.insert(word.clone());
        self.words.push(word);
    }

    fn resolve(&self, ids: Option<&Vec<usize>>) -> Vec<&str> {
        ids.map(|ids| ids.iter().map(|&id| self.words[id].as_str()).collect())
            .unwrap_or_default()
    }
}

impl Dictionary for Lexicon {
    fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    fn words_of_length(&self, len: usize) -> Vec<&str> {
        self.resolve(self.by_length.get(&len))
    }

    fn words_matching(&self, token: &str) -> Vec<&str> {
        self.resolve(self.by_pattern.get(&Pattern::of(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn entries_are_normalized() {
        let lexicon = Lexicon::from_words(["  cat ", "Dog", "", "CAT", "\t"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("DOG"));
        assert!(!lexicon.contains("cat"));
    }

    #[test]
    fn words_of_length_keeps_load_order() {
        let lexicon = Lexicon::from_words(["ZOO", "A", "CAT", "BE", "ANT"]);
        assert_eq!(lexicon.words_of_length(3), vec!["ZOO", "CAT", "ANT"]);
        assert_eq!(lexicon.words_of_length(1), vec!["A"]);
        assert!(lexicon.words_of_length(7).is_empty());
    }

    #[test]
    fn words_matching_filters_by_shape() {
        let lexicon = Lexicon::from_words(["ZOO", "CAT", "SEE", "ANT"]);
        assert_eq!(lexicon.words_matching("XYY"), vec!["ZOO", "SEE"]);
        assert_eq!(lexicon.words_matching("QRS"), vec!["CAT", "ANT"]);
        assert!(lexicon.words_matching("QQQ").is_empty());
    }

    #[test]
    fn apostrophe_words_match_distinct_letter_tokens() {
        let lexicon = Lexicon::from_words(["don't", "WORDS", "IT'S"]);
        assert_eq!(lexicon.words_matching("ABCDE"), vec!["DON'T", "WORDS"]);
        assert_eq!(lexicon.words_matching("QRST"), vec!["IT'S"]);
    }

    #[test]
    fn default_words_matching_agrees_with_index() {
        struct Plain(Vec<&'static str>);
        impl Dictionary for Plain {
            fn contains(&self, word: &str) -> bool {
                self.0.iter().any(|w| *w == word)
            }
            fn words_of_length(&self, len: usize) -> Vec<&str> {
                self.0.iter().copied().filter(|w| w.len() == len).collect()
            }
        }

        let words = vec!["ZOO", "CAT", "SEE", "ANT", "NOON", "DEED", "IT'S"];
        let plain = Plain(words.clone());
        let lexicon = Lexicon::from_words(&words);
        for token in ["XYY", "QRS", "ABBA", "ABCD"] {
            assert_eq!(plain.words_matching(token), lexicon.words_matching(token));
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello\nworld\n\n  Rust  ").unwrap();

        let lexicon = Lexicon::try_load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("RUST"));
    }

    #[test]
    fn missing_file_is_an_error_for_try_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::try_load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CryptogramError::WordSourceUnavailable { .. }));
    }

    #[test]
    fn directory_is_not_a_word_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Lexicon::try_load(dir.path()).is_err());
    }

    #[test]
    fn invalid_utf8_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\ndog\n\xff\xfe\nbird\n").unwrap();

        let err = Lexicon::try_load(file.path()).unwrap_err();
        assert!(matches!(err, CryptogramError::WordSourceUnavailable { .. }));

        let lexicon = Lexicon::load(file.path());
        assert_eq!(lexicon.len(), FALLBACK_WORDS.len());
        assert!(!lexicon.contains("CAT"));
        assert!(lexicon.contains("SOLUTION"));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = Lexicon::load(dir.path().join("missing.txt"));
        assert_eq!(lexicon.len(), FALLBACK_WORDS.len());
        for word in ["THIS", "IS", "A", "TEST", "CRYPTOGRAM", "SOLUTION"] {
            assert!(lexicon.contains(word));
        }
    }
}
