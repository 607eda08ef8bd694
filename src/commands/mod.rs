//! Command implementations
//!
//! Front ends other than the TUI, each driving the library API.

pub mod evaluate;
pub mod simple;

pub use evaluate::{Evaluation, evaluate_words};
pub use simple::{run_simple, run_simple_with};
