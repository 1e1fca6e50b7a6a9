use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// A partial substitution key from ciphertext letters to plaintext letters.
///
/// A mapping is always functional and injective: no ciphertext letter maps to
/// two plaintext letters, and no plaintext letter is claimed twice. The only
/// way to grow one is [`Mapping::extend`], which returns a new mapping and
/// leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    key: HashMap<char, char>,
    used: HashSet<char>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cipher: char) -> Option<char> {
        self.key.get(&cipher).copied()
    }

    /// Whether some ciphertext letter already maps to `plain`.
    pub fn is_used(&self, plain: char) -> bool {
        self.used.contains(&plain)
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Pairs in ciphertext order.
    pub fn pairs(&self) -> BTreeMap<char, char> {
        self.key.iter().map(|(&c, &p)| (c, p)).collect()
    }

    /// Pairs `encrypted_word` with `word` letter by letter on top of this
    /// mapping. Returns `None` if a letter is already mapped elsewhere or a
    /// plaintext letter is already taken by a different ciphertext letter.
    pub fn extend(&self, encrypted_word: &str, word: &str) -> Option<Mapping> {
        if encrypted_word.chars().count() != word.chars().count() {
            return None;
        }

        let mut key = self.clone();

        for (from, to) in encrypted_word.chars().zip(word.chars()) {
            match key.get(from) {
                Some(mapped) if mapped == to => continue,
                Some(_) => return None,
                None if key.is_used(to) => return None,
                None => {
                    key.key.insert(from, to);
                    key.used.insert(to);
                }
            }
        }

        Some(key)
    }

    /// Decodes a token. Letters without a mapping are passed through.
    pub fn decode(&self, token: &str) -> String {
        token.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }

    /// Decodes a token, showing letters without a mapping as `.`.
    pub fn partial(&self, word: &str) -> String {
        word.chars().map(|c| self.get(c).unwrap_or('.')).collect()
    }

    /// Decodes free text in place: letters are uppercased and mapped, every
    /// other character is kept where it was.
    pub fn decode_text(&self, text: &str) -> String {
        let mut solution = String::with_capacity(text.len());

        for letter in text.chars().flat_map(char::to_uppercase) {
            if !letter.is_ascii_uppercase() {
                solution.push(letter);
                continue;
            }

            solution.push(self.get(letter).unwrap_or(letter));
        }

        solution
    }

    /// True when no plaintext letter is claimed by two ciphertext letters.
    pub fn is_injective(&self) -> bool {
        let values: HashSet<char> = self.key.values().copied().collect();
        values.len() == self.key.len() && values == self.used
    }
}

/// Prints the key as two aligned rows, ciphertext over plaintext.
impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.pairs();
        let cipher: String = pairs.keys().collect();
        let plain: String = pairs.values().collect();
        writeln!(f, "{}", cipher)?;
        write!(f, "{}", plain)
    }
}
