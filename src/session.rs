//! The interactive prompt loop.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::report::Report;
use crate::solver::{Solver, SolverConfig};
use crate::tokenize::tokenize;

pub const PROMPT: &str = "Enter your cryptogram:";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The interrupt signal fired.
    Interrupted,
    /// The user typed `quit` or `exit`.
    Quit,
    EndOfInput,
}

pub struct Session<'a> {
    solver: Solver<'a, Lexicon>,
    keep_punctuation: bool,
    show_key: bool,
}

impl<'a> Session<'a> {
    pub fn new(lexicon: &'a Lexicon, config: SolverConfig) -> Result<Self> {
        Ok(Self {
            solver: Solver::with_config(lexicon, config)?,
            keep_punctuation: false,
            show_key: false,
        })
    }

    pub fn keep_punctuation(mut self, keep_punctuation: bool) -> Self {
        self.keep_punctuation = keep_punctuation;
        self
    }

    pub fn show_key(mut self, show_key: bool) -> Self {
        self.show_key = show_key;
        self
    }

    /// Solves one line of input and renders the report.
    pub fn solve_line(&self, line: &str) -> String {
        let tokens = tokenize(line);
        debug!(?tokens, "tokenized input");

        let solution = self.solver.solve(&tokens);
        let mut report = Report::new(&solution).show_key(self.show_key);
        if self.keep_punctuation {
            report = report.keep_punctuation(line);
        }
        report.to_string()
    }

    /// Prompts for cryptograms on `output` and answers each line read from
    /// `input` until the input ends, the user quits, or `interrupt`
    /// completes. The interrupt is only observed between solve attempts.
    pub async fn run<R, W, F>(&self, input: R, output: &mut W, interrupt: F) -> Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future,
    {
        let mut lines = input.lines();
        tokio::pin!(interrupt);

        loop {
            output.write_all(format!("{}\n", PROMPT).as_bytes()).await?;
            output.flush().await?;

            let line = tokio::select! {
                _ = &mut interrupt => {
                    output
                        .write_all(b"\nProcess interrupted by the user. Exiting.\n")
                        .await?;
                    output.flush().await?;
                    info!("session interrupted");
                    return Ok(SessionEnd::Interrupted);
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                return Ok(SessionEnd::EndOfInput);
            };

            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                return Ok(SessionEnd::Quit);
            }
            if trimmed.is_empty() {
                continue;
            }

            output.write_all(self.solve_line(trimmed).as_bytes()).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(lexicon: &Lexicon) -> Session<'_> {
        Session::new(lexicon, SolverConfig::default()).unwrap()
    }

    #[test]
    fn solve_line_discards_punctuation_by_default() {
        let lexicon = Lexicon::fallback();
        let out = session(&lexicon).solve_line("Zoxk xk q zrkz!");
        assert_eq!(out, "Decrypted Text: THIS IS A TEST\n");
    }

    #[test]
    fn solve_line_can_keep_punctuation() {
        let lexicon = Lexicon::fallback();
        let out = session(&lexicon)
            .keep_punctuation(true)
            .solve_line("Zoxk xk q zrkz!");
        assert_eq!(out, "Decrypted Text: THIS IS A TEST!\n");
    }

    #[tokio::test]
    async fn answers_until_end_of_input() {
        let lexicon = Lexicon::fallback();
        let input: &[u8] = b"zoxk xk q zrkz\n\nqq\n";
        let mut output = Vec::new();

        let end = session(&lexicon)
            .run(input, &mut output, std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(end, SessionEnd::EndOfInput);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Decrypted Text: THIS IS A TEST"));
        assert!(text.contains("THIS CRYPTOGRAM HAS NO SOLUTION."));
        assert_eq!(text.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let lexicon = Lexicon::fallback();
        let input: &[u8] = b"quit\nzoxk xk q zrkz\n";
        let mut output = Vec::new();

        let end = session(&lexicon)
            .run(input, &mut output, std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(end, SessionEnd::Quit);
        assert!(!String::from_utf8(output).unwrap().contains("Decrypted"));
    }

    #[tokio::test]
    async fn interrupt_ends_the_session() {
        let lexicon = Lexicon::fallback();
        let (_tx, rx) = tokio::io::duplex(64);
        let mut output = Vec::new();

        let end = session(&lexicon)
            .run(tokio::io::BufReader::new(rx), &mut output, async {})
            .await
            .unwrap();

        assert_eq!(end, SessionEnd::Interrupted);
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Process interrupted by the user."));
    }
}
