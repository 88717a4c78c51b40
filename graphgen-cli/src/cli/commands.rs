//! Command implementations and argument parsing for the graphgen CLI.

use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use graphgen_core::{
    DEFAULT_COORDINATE_EXTENT, DEFAULT_EDGE_PROBABILITY, EdgeList, EdgeListError, GeneratorBuilder,
    GeneratorError, OutputError, WritePolicy, output_path, write_sample,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::prompt::{FILENAME_PROMPT, LinePrompter, NODE_COUNT_PROMPT, Prompt, PromptError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    about = "Generate random graph edge lists for pathfinding test sets."
)]
pub struct Cli {
    /// Command to execute. Without one, `generate` runs with default
    /// options and prompts for the node count and filename.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random edge list and write it to `<OUTPUT>.txt`.
    Generate(GenerateCommand),
    /// Load an edge-list file and report what it contains.
    Inspect(InspectCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes. Prompted for on stdin when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(usize))]
    pub nodes: Option<usize>,

    /// Output base name; `.txt` is appended. Prompted for on stdin when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for a reproducible sample. Drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that any given pair of nodes is connected.
    #[arg(long = "edge-probability", default_value_t = DEFAULT_EDGE_PROBABILITY)]
    pub edge_probability: f64,

    /// Exclusive upper bound of each coordinate axis.
    #[arg(long, default_value_t = DEFAULT_COORDINATE_EXTENT)]
    pub extent: f64,

    /// Replace the output file if it already exists.
    #[arg(long)]
    pub overwrite: bool,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            nodes: None,
            output: None,
            seed: None,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            extent: DEFAULT_COORDINATE_EXTENT,
            overwrite: false,
        }
    }
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Edge-list file to load.
    pub path: PathBuf,

    /// Node count the file was generated with, used to count isolated nodes.
    #[arg(short, long)]
    pub nodes: Option<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Interactive input failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// The prompted node count was not a non-negative integer.
    #[error("node count must be a non-negative integer (got `{raw}`): {source}")]
    InvalidNodeCount {
        /// Answer as typed.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The prompted filename was blank.
    #[error("output filename must not be empty")]
    EmptyFilename,
    /// Generator configuration was rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Writing the sample failed.
    #[error(transparent)]
    Output(#[from] OutputError),
    /// Loading an edge list failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
}

impl CliError {
    /// Stable code of the library error behind this failure, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(error) => Some(error.code().as_str()),
            Self::Output(error) => Some(error.code().as_str()),
            Self::EdgeList(error) => Some(error.code().as_str()),
            Self::Prompt(_) | Self::InvalidNodeCount { .. } | Self::EmptyFilename => None,
        }
    }
}

/// Outcome of a successful `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Number of generated nodes.
    pub node_count: usize,
    /// Number of pairs evaluated.
    pub candidate_count: usize,
    /// Number of edges written.
    pub edge_count: usize,
    /// File the edges were written to.
    pub path: PathBuf,
}

/// Outcome of a successful `inspect` run.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionSummary {
    /// File that was loaded.
    pub path: PathBuf,
    /// Distinct node ids referenced.
    pub node_count: usize,
    /// Number of records.
    pub edge_count: usize,
    /// Highest referenced id.
    pub max_node_id: Option<usize>,
    /// Declared nodes that no record references, when a count was supplied.
    pub isolated_nodes: Option<usize>,
    /// Sum of the Euclidean lengths of all edges.
    pub total_length: f64,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// A sample was generated and written.
    Generated(GenerationSummary),
    /// An edge list was loaded and measured.
    Inspected(InspectionSummary),
}

/// Executes the CLI command represented by `cli`, prompting on the standard
/// streams for anything missing.
///
/// # Errors
/// Returns [`CliError`] when prompting, generation, or file access fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    run_cli_with(cli, &mut LinePrompter::stdio())
}

/// Executes the CLI command represented by `cli`, taking missing values
/// from `prompter`.
///
/// # Errors
/// Returns [`CliError`] when prompting, generation, or file access fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphgen_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, LinePrompter, run_cli_with};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let base = dir.path().join("graph");
/// let answers = format!("50\n{}\n", base.display());
/// let cli = Cli {
///     command: Some(Command::Generate(GenerateCommand {
///         seed: Some(7),
///         edge_probability: 0.05,
///         ..GenerateCommand::default()
///     })),
/// };
/// let mut prompter = LinePrompter::new(answers.as_bytes(), std::io::sink());
/// let ExecutionSummary::Generated(summary) = run_cli_with(cli, &mut prompter)? else {
///     panic!("generate yields a generation summary");
/// };
/// assert_eq!(summary.node_count, 50);
/// assert!(summary.path.ends_with("graph.txt"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, prompter),
    fields(command = field::Empty),
)]
pub fn run_cli_with<P: Prompt + ?Sized>(
    cli: Cli,
    prompter: &mut P,
) -> Result<ExecutionSummary, CliError> {
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateCommand::default()));
    match command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate, prompter).map(ExecutionSummary::Generated)
        }
        Command::Inspect(inspect) => {
            Span::current().record("command", field::display("inspect"));
            run_inspect(&inspect).map(ExecutionSummary::Inspected)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command, prompter),
    fields(
        nodes = field::Empty,
        path = field::Empty,
        seed = field::Empty,
        overwrite = command.overwrite,
    ),
)]
pub(super) fn run_generate<P: Prompt + ?Sized>(
    command: GenerateCommand,
    prompter: &mut P,
) -> Result<GenerationSummary, CliError> {
    let span = Span::current();
    let node_count = command
        .nodes
        .map_or_else(|| prompt_node_count(prompter), Ok)?;
    span.record("nodes", node_count);
    let base = command
        .output
        .map_or_else(|| prompt_filename(prompter), Ok)?;

    let generator = GeneratorBuilder::new()
        .with_node_count(node_count)
        .with_edge_probability(command.edge_probability)
        .with_coordinate_extent(command.extent)
        .build()?;

    let mut rng = command.seed.map_or_else(
        SmallRng::from_entropy,
        |seed| {
            span.record("seed", seed);
            SmallRng::seed_from_u64(seed)
        },
    );
    let sample = generator.generate(&mut rng);

    let path = output_path(&base);
    span.record("path", field::display(path.display()));
    let policy = if command.overwrite {
        WritePolicy::Overwrite
    } else {
        WritePolicy::CreateNew
    };
    write_sample(&path, &sample, policy)?;

    info!(
        nodes = node_count,
        edges = sample.edge_count(),
        "command completed"
    );
    Ok(GenerationSummary {
        node_count,
        candidate_count: generator.candidate_count(),
        edge_count: sample.edge_count(),
        path,
    })
}

fn prompt_node_count<P: Prompt + ?Sized>(prompter: &mut P) -> Result<usize, CliError> {
    let answer = prompter.ask(NODE_COUNT_PROMPT)?;
    parse_node_count(&answer)
}

pub(super) fn parse_node_count(raw: &str) -> Result<usize, CliError> {
    raw.trim()
        .parse()
        .map_err(|source| CliError::InvalidNodeCount {
            raw: raw.to_owned(),
            source,
        })
}

fn prompt_filename<P: Prompt + ?Sized>(prompter: &mut P) -> Result<PathBuf, CliError> {
    let answer = prompter.ask(FILENAME_PROMPT)?;
    if answer.is_empty() {
        return Err(CliError::EmptyFilename);
    }
    Ok(PathBuf::from(answer))
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(command),
    fields(path = %command.path.display()),
)]
pub(super) fn run_inspect(command: &InspectCommand) -> Result<InspectionSummary, CliError> {
    let list = EdgeList::from_path(&command.path)?;
    info!(
        nodes = list.node_count(),
        edges = list.edge_count(),
        "command completed"
    );
    Ok(InspectionSummary {
        path: command.path.clone(),
        node_count: list.node_count(),
        edge_count: list.edge_count(),
        max_node_id: list.max_node_id().map(|id| id.get()),
        isolated_nodes: command
            .nodes
            .map(|declared| list.isolated_node_count(declared)),
        total_length: list.total_length(),
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use graphgen_cli::cli::{ExecutionSummary, GenerationSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated(GenerationSummary {
///     node_count: 100,
///     candidate_count: 4_950,
///     edge_count: 3,
///     path: PathBuf::from("graph.txt"),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("Random graph generated with 100 nodes.\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(
                writer,
                "Random graph generated with {} nodes.",
                generated.node_count
            )?;
            writeln!(writer, "output: {}", generated.path.display())?;
            writeln!(
                writer,
                "edges: {} of {} candidate pairs",
                generated.edge_count, generated.candidate_count
            )?;
        }
        ExecutionSummary::Inspected(inspected) => {
            writeln!(writer, "file: {}", inspected.path.display())?;
            writeln!(writer, "nodes: {}", inspected.node_count)?;
            writeln!(writer, "edges: {}", inspected.edge_count)?;
            let max_id = inspected
                .max_node_id
                .map_or_else(|| "none".to_owned(), |id| id.to_string());
            writeln!(writer, "max id: {max_id}")?;
            if let Some(isolated) = inspected.isolated_nodes {
                writeln!(writer, "isolated nodes: {isolated}")?;
            }
            writeln!(writer, "total length: {:.2}", inspected.total_length)?;
        }
    }
    Ok(())
}
