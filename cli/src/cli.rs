//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Primer - arrays, slices, maps and checked division, demonstrated
#[derive(Parser, Debug)]
#[command(name = "primer", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the demonstration transcript
    Demo(DemoArgs),

    /// Add two integers
    Add(AddArgs),

    /// Divide two integers
    Divide(DivideArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Sections to print, in the order given (default: all)
    #[arg(value_enum)]
    pub sections: Vec<Section>,
}

/// Arguments for the `add` command.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    #[arg(allow_negative_numbers = true)]
    pub y: i64,
}

/// Arguments for the `divide` command.
#[derive(Args, Debug)]
pub struct DivideArgs {
    /// Dividend
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    /// Divisor
    #[arg(allow_negative_numbers = true)]
    pub y: i64,

    /// Divide without checking the divisor; a zero divisor aborts the process
    #[arg(long)]
    pub unchecked: bool,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// A section of the demonstration transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Variable declarations and constants
    Basics,
    /// Plain function calls
    Functions,
    /// Division with an error result
    Errors,
    /// Fixed-length arrays
    Arrays,
    /// Slices over an array, in-place appends and reallocation
    Slices,
    /// Nil, made and literal maps
    Maps,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Basics,
        Section::Functions,
        Section::Errors,
        Section::Arrays,
        Section::Slices,
        Section::Maps,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Basics => "Basic Demonstrations",
            Section::Functions => "Function Demonstrations",
            Section::Errors => "Error Handling",
            Section::Arrays => "Array Demonstrations",
            Section::Slices => "Array and Slice Demonstrations",
            Section::Maps => "Map Demonstrations",
        }
    }
}
