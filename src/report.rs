//! Text rendering of a [`Solution`].

use std::fmt;

use crate::solver::{Outcome, Solution};

pub const NO_SOLUTION: &str = "THIS CRYPTOGRAM HAS NO SOLUTION.";

pub struct Report<'a> {
    solution: &'a Solution,
    original: Option<&'a str>,
    show_key: bool,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Self {
            solution,
            original: None,
            show_key: false,
        }
    }

    /// Render the decoded text over `original` so its punctuation survives.
    pub fn keep_punctuation(mut self, original: &'a str) -> Self {
        self.original = Some(original);
        self
    }

    pub fn show_key(mut self, show_key: bool) -> Self {
        self.show_key = show_key;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestions = &self.solution.suggestions;

        match &self.solution.outcome {
            Outcome::Solved { text, mapping } => {
                match self.original {
                    Some(original) => {
                        writeln!(f, "Decrypted Text: {}", mapping.decode_text(original.trim()))?
                    }
                    None => writeln!(f, "Decrypted Text: {}", text)?,
                }
                if self.show_key {
                    writeln!(f, "Key:\n{}", mapping)?;
                }
                if !suggestions.is_empty() {
                    writeln!(f, "Non-English words detected:")?;
                    for (word, guesses) in suggestions.iter() {
                        writeln!(f, "'{}': Best guesses: {}", word, guesses.join(", "))?;
                    }
                }
            }
            Outcome::Unsolved => {
                writeln!(f, "Answer:\n{}", NO_SOLUTION)?;
                for (word, guesses) in suggestions.iter() {
                    writeln!(
                        f,
                        "Non-English word: '{}', Best guesses: {}",
                        word,
                        guesses.join(", ")
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::solve;
    use crate::tokenize::tokenize;

    #[test]
    fn solved_report() {
        let lexicon = Lexicon::fallback();
        let solution = solve(&tokenize("zoxk xk q zrkz"), &lexicon);
        assert_eq!(
            Report::new(&solution).to_string(),
            "Decrypted Text: THIS IS A TEST\n"
        );
    }

    #[test]
    fn solved_report_keeps_punctuation() {
        let lexicon = Lexicon::fallback();
        let line = "Zoxk xk q zrkz!";
        let solution = solve(&tokenize(line), &lexicon);
        let report = Report::new(&solution).keep_punctuation(line).to_string();
        assert_eq!(report, "Decrypted Text: THIS IS A TEST!\n");
    }

    #[test]
    fn solved_report_shows_key() {
        let lexicon = Lexicon::from_words(["CAT"]);
        let solution = solve(&["ABC"], &lexicon);
        let report = Report::new(&solution).show_key(true).to_string();
        assert_eq!(report, "Decrypted Text: CAT\nKey:\nABC\nCAT\n");
    }

    #[test]
    fn unsolved_report_lists_guesses() {
        let lexicon = Lexicon::from_words(["IS", "NO"]);
        let solution = solve(&["QQ"], &lexicon);
        assert_eq!(
            Report::new(&solution).to_string(),
            "Answer:\nTHIS CRYPTOGRAM HAS NO SOLUTION.\n\
             Non-English word: 'QQ', Best guesses: IS, NO\n"
        );
    }
}
