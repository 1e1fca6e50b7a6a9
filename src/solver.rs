//! Backtracking search for a substitution key.
//!
//! Tokens are assigned dictionary words left to right. Each assignment
//! extends a copy of the current [`Mapping`]; a word that would break the
//! mapping is skipped, and when a token runs out of words the search falls
//! back to the previous token. The first mapping that covers every token is
//! accepted and the search stops there. No attempt is made to find a better
//! one, so with several valid keys the answer depends on candidate order.
//!
//! Every recursive call counts as one step. Once the step count passes
//! [`SolverConfig::step_limit`] the search gives up, so `Unsolved` can be a
//! false negative when the limit is hit; [`SearchStats::ceiling_hit`] says
//! whether that happened.

use tracing::{debug, trace};

use crate::error::{CryptogramError, Result};
use crate::lexicon::Dictionary;
use crate::mapping::Mapping;

pub const DEFAULT_STEP_LIMIT: usize = 1000;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;
pub const DEFAULT_MAX_UNRESOLVED: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Recursive calls allowed per solve attempt.
    pub step_limit: usize,
    /// Try candidates in lexicographic order instead of dictionary order.
    pub sort_candidates: bool,
    /// Suggested words per unresolved token.
    pub max_suggestions: usize,
    /// Unresolved tokens reported.
    pub max_unresolved: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            sort_candidates: false,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_unresolved: DEFAULT_MAX_UNRESOLVED,
        }
    }
}

impl SolverConfig {
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_sorted_candidates(mut self, sort_candidates: bool) -> Self {
        self.sort_candidates = sort_candidates;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_limit == 0 {
            return Err(CryptogramError::invalid_config(
                "step limit must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { text: String, mapping: Mapping },
    Unsolved,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Solved { text, .. } => Some(text),
            Outcome::Unsolved => None,
        }
    }

    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            Outcome::Solved { mapping, .. } => Some(mapping),
            Outcome::Unsolved => None,
        }
    }
}

/// Unresolved tokens with candidate words, in the order the tokens appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions(Vec<(String, Vec<String>)>);

impl Suggestions {
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, words)| words.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0.iter().map(|(t, words)| (t.as_str(), words.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: usize,
    pub ceiling_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub outcome: Outcome,
    pub suggestions: Suggestions,
    pub stats: SearchStats,
}

/// State shared by every branch of one solve attempt.
#[derive(Debug)]
struct SearchContext {
    steps: usize,
    limit: usize,
    aborted: bool,
    accepted: Option<Mapping>,
}

impl SearchContext {
    fn new(limit: usize) -> Self {
        Self {
            steps: 0,
            limit,
            aborted: false,
            accepted: None,
        }
    }

    /// Counts a step; returns false once the limit is exceeded.
    fn step(&mut self) -> bool {
        self.steps += 1;
        if self.steps > self.limit {
            self.aborted = true;
        }
        !self.aborted
    }

    fn finished(&self) -> bool {
        self.aborted || self.accepted.is_some()
    }
}

pub struct Solver<'d, D: Dictionary + ?Sized> {
    dictionary: &'d D,
    config: SolverConfig,
}

impl<'d, D: Dictionary + ?Sized> Solver<'d, D> {
    pub fn new(dictionary: &'d D) -> Self {
        Self {
            dictionary,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(dictionary: &'d D, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { dictionary, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve<S: AsRef<str>>(&self, tokens: &[S]) -> Solution {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

        // A word whose pattern differs from the token's always fails
        // `Mapping::extend` before recursing, so dropping it up front does
        // not change step counts or which key is found first.
        let candidates: Vec<Vec<&str>> = tokens
            .iter()
            .map(|token| self.ordered(self.dictionary.words_matching(token)))
            .collect();

        let mut ctx = SearchContext::new(self.config.step_limit);
        self.search(&tokens, &candidates, 0, &Mapping::new(), &mut ctx);

        let stats = SearchStats {
            steps: ctx.steps,
            ceiling_hit: ctx.aborted,
        };
        debug!(
            tokens = tokens.len(),
            steps = stats.steps,
            ceiling_hit = stats.ceiling_hit,
            solved = ctx.accepted.is_some(),
            "search finished"
        );

        match ctx.accepted {
            Some(mapping) => {
                let decoded: Vec<String> = tokens.iter().map(|t| mapping.decode(t)).collect();
                let failing = tokens
                    .iter()
                    .zip(&decoded)
                    .filter(|(_, plain)| !self.dictionary.contains(plain))
                    .map(|(token, _)| *token);
                let suggestions = self.suggest(failing);

                Solution {
                    outcome: Outcome::Solved {
                        text: decoded.join(" "),
                        mapping,
                    },
                    suggestions,
                    stats,
                }
            }
            None => {
                let failing = tokens
                    .iter()
                    .copied()
                    .filter(|token| !self.dictionary.contains(token));
                Solution {
                    outcome: Outcome::Unsolved,
                    suggestions: self.suggest(failing),
                    stats,
                }
            }
        }
    }

    fn search(
        &self,
        tokens: &[&str],
        candidates: &[Vec<&str>],
        index: usize,
        mapping: &Mapping,
        ctx: &mut SearchContext,
    ) {
        if !ctx.step() {
            return;
        }

        if index == tokens.len() {
            ctx.accepted = Some(mapping.clone());
            return;
        }

        let token = tokens[index];
        for &word in &candidates[index] {
            let Some(extended) = mapping.extend(token, word) else {
                continue;
            };

            trace!(index, token, word, partial = %extended.partial(token), "trying");
            self.search(tokens, candidates, index + 1, &extended, ctx);
            if ctx.finished() {
                return;
            }
        }
    }

    fn suggest<'a>(&self, failing: impl Iterator<Item = &'a str>) -> Suggestions {
        let mut seen: Vec<&str> = Vec::new();
        let mut suggestions = Vec::new();

        for token in failing.take(self.config.max_unresolved) {
            if seen.contains(&token) {
                continue;
            }
            seen.push(token);

            let guesses: Vec<String> = self
                .ordered(self.dictionary.words_of_length(token.chars().count()))
                .into_iter()
                .take(self.config.max_suggestions)
                .map(str::to_string)
                .collect();
            if !guesses.is_empty() {
                suggestions.push((token.to_string(), guesses));
            }
        }

        Suggestions(suggestions)
    }

    fn ordered<'w>(&self, mut words: Vec<&'w str>) -> Vec<&'w str> {
        if self.config.sort_candidates {
            words.sort_unstable();
        }
        words
    }
}

/// Solves `tokens` against `dictionary` with the default configuration.
pub fn solve<D, S>(tokens: &[S], dictionary: &D) -> Solution
where
    D: Dictionary + ?Sized,
    S: AsRef<str>,
{
    Solver::new(dictionary).solve(tokens)
}
