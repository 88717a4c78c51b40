//! Command-line interface orchestration for graphgen.
//!
//! `generate` draws a random edge list and writes it to `<base>.txt`,
//! prompting for the node count and base name when they are not passed as
//! flags. `inspect` loads an edge-list file and reports what it contains.

mod commands;
mod prompt;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GenerationSummary,
    InspectCommand, InspectionSummary, render_summary, run_cli, run_cli_with,
};
pub use prompt::{FILENAME_PROMPT, LinePrompter, NODE_COUNT_PROMPT, Prompt, PromptError};
