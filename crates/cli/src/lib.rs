#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Prompting for a term count and printing the resulting sequences, shared by the `fibseq` binary.

pub mod input;
pub mod output;

pub use input::{PROMPT, parse_terms, read_terms};
pub use output::{Style, present, render};
