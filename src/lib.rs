//! Solver for monoalphabetic substitution cryptograms.
//!
//! ```
//! use cryptogram_solver::{solve, tokenize, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["OK", "KO"]);
//! let solution = solve(&tokenize("ab ba"), &lexicon);
//! assert_eq!(solution.outcome.text(), Some("OK KO"));
//! ```

pub mod cli;
pub mod error;
pub mod lexicon;
pub mod mapping;
pub mod pattern;
pub mod report;
pub mod session;
pub mod solver;
pub mod tokenize;

pub use error::{CryptogramError, Result};
pub use lexicon::{Dictionary, Lexicon};
pub use mapping::Mapping;
pub use pattern::Pattern;
pub use report::Report;
pub use solver::{solve, Outcome, SearchStats, Solution, Solver, SolverConfig, Suggestions};
pub use tokenize::tokenize;
