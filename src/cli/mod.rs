//! Command-line interface for map-strings.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **map**: Report which references contain each query k-mer or unitig
//!
//! ## Usage
//!
//! ```text
//! # Map unitigs against references listed in a file, using 8 threads
//! map-strings map --references refs.txt --queries unitigs.txt --output presence.txt --threads 8
//!
//! # Name references after their FASTA files
//! map-strings map --fasta a.fa --fasta b.fa.gz --queries kmers.txt --output -
//!
//! # JSON run summary for scripting
//! map-strings --format json map -r refs.txt -q unitigs.txt -o presence.txt
//! ```

use clap::{Parser, Subcommand};

pub mod map;

#[derive(Parser)]
#[command(name = "map-strings")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Report exact matches of k-mers and unitigs to reference sequences")]
#[command(
    long_about = "map-strings reports, for each query k-mer or unitig, every reference sequence containing it.\n\nQueries are searched on both strands. The presence list has one line per query that was found:\n  <query> | <name1>:1 <name2>:1 ..."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the run summary
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map queries to reference sequences and write a presence list
    Map(map::MapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
