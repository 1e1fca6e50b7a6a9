use std::collections::HashMap;

/// The repetition shape of a word: every distinct character gets the next
/// symbol in order of first appearance, so `HELLO` and `ABCCD` share a
/// pattern. Non-letters are symbols like any other character.
///
/// A word can only be substituted for a token if their patterns match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u32>);

impl Pattern {
    pub fn of(word: &str) -> Self {
        let mut found = HashMap::new();
        let mut current = 0;
        let mut result = Vec::with_capacity(word.len());

        for letter in word.chars() {
            match found.get(&letter) {
                Some(&value) => result.push(value),
                None => {
                    found.insert(letter, current);
                    result.push(current);
                    current += 1;
                }
            }
        }

        Pattern(result)
    }

    pub fn symbols(&self) -> &[u32] {
        &self.0
    }
}
