use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::core::sequence::{Sequence, SequenceStore};
use crate::core::types::MapSummary;
use crate::matching::engine::map_queries;
use crate::output::PresenceWriter;
use crate::parsing::queries::read_queries;
use crate::parsing::reference_list::{read_reference_list, ReferenceEntry};

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("reference_input")
        .required(true)
        .multiple(true)
        .args(["references", "fasta"])
))]
pub struct MapArgs {
    /// File listing reference FASTA files, one '<path> [<name>]' per line
    #[arg(short, long)]
    pub references: Option<PathBuf>,

    /// Reference FASTA file, named after its file stem (may be repeated)
    #[arg(long)]
    pub fasta: Vec<PathBuf>,

    /// Query file with one k-mer or unitig per line ('-' for stdin)
    #[arg(short, long)]
    pub queries: PathBuf,

    /// Presence list output ('-' for stdout)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of worker threads
    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=1024)
    )]
    pub threads: u32,
}

/// Settings for one mapping run, resolved from the command line
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub references: Vec<ReferenceEntry>,
    pub queries: PathBuf,
    pub output: PathBuf,
    pub workers: usize,
}

impl MapConfig {
    /// Resolve reference inputs from the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the reference list cannot be read.
    pub fn from_args(args: &MapArgs) -> anyhow::Result<Self> {
        let mut references = match &args.references {
            Some(path) => read_reference_list(path)
                .with_context(|| format!("Failed to read reference list {}", path.display()))?,
            None => Vec::new(),
        };
        references.extend(args.fasta.iter().map(ReferenceEntry::from_path));

        Ok(Self {
            references,
            queries: args.queries.clone(),
            output: args.output.clone(),
            workers: args.threads as usize,
        })
    }
}

/// Execute map subcommand
///
/// # Errors
///
/// Returns an error if any input cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MapArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = MapConfig::from_args(&args)?;

    info!("Reading reference sequences into memory...");
    let store = SequenceStore::load_all(&config.references)
        .context("Failed to load reference sequences")?;

    let total_bp: usize = store.iter().map(Sequence::total_length).sum();
    debug!("Loaded {} references ({total_bp} bp)", store.len());

    let queries = read_queries(&config.queries)
        .with_context(|| format!("Failed to read queries from {}", config.queries.display()))?;

    let mut sink = PresenceWriter::create(&config.output)
        .with_context(|| format!("Failed to create output {}", config.output.display()))?;

    let summary = map_queries(&store, queries.as_slice(), config.workers, &mut sink)
        .with_context(|| format!("Failed to map queries to {}", config.output.display()))?;

    print_summary(&summary, format, &config.output)
}

fn print_summary(summary: &MapSummary, format: OutputFormat, output: &Path) -> anyhow::Result<()> {
    // Keep stdout clean when the presence list itself goes there
    let mut out: Box<dyn Write> = if output.as_os_str() == "-" {
        Box::new(std::io::stderr().lock())
    } else {
        Box::new(std::io::stdout().lock())
    };

    match format {
        OutputFormat::Text => {
            writeln!(out, "References: {}", summary.references)?;
            writeln!(out, "Workers: {}", summary.workers)?;
            writeln!(out, "Queries: {}", summary.queries)?;
            writeln!(
                out,
                "Queries with hits: {} ({:.2}%)",
                summary.queries_with_hits,
                summary.hit_rate() * 100.0
            )?;
            writeln!(out, "Total hits: {}", summary.total_hits)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "references\tworkers\tqueries\tqueries_with_hits\ttotal_hits")?;
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                summary.references,
                summary.workers,
                summary.queries,
                summary.queries_with_hits,
                summary.total_hits
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_args() {
        let mut list = NamedTempFile::new().unwrap();
        writeln!(list, "refs/a.fa\tfirst").unwrap();
        list.flush().unwrap();

        let args = MapArgs {
            references: Some(list.path().to_path_buf()),
            fasta: vec![PathBuf::from("refs/b.fasta")],
            queries: PathBuf::from("q.txt"),
            output: PathBuf::from("out.txt"),
            threads: 3,
        };

        let config = MapConfig::from_args(&args).unwrap();
        assert_eq!(config.workers, 3);
        assert_eq!(
            config.references,
            vec![
                ReferenceEntry::new("first", "refs/a.fa"),
                ReferenceEntry::new("b", "refs/b.fasta"),
            ]
        );
    }

    #[test]
    fn test_config_missing_list() {
        let args = MapArgs {
            references: Some(PathBuf::from("/nonexistent/refs.txt")),
            fasta: Vec::new(),
            queries: PathBuf::from("q.txt"),
            output: PathBuf::from("out.txt"),
            threads: 1,
        };
        assert!(MapConfig::from_args(&args).is_err());
    }
}
