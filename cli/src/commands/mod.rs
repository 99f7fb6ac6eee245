//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod arith;
pub mod completions;
pub mod demo;
