//! TextSearch CLI - index text files and query the words in them
//!
//! # Examples
//!
//! ```bash
//! # Print the 10 most frequent words across five files
//! textsearch -i 0.txt 1.txt 2.txt 3.txt 4.txt -t 10
//!
//! # Find the word "river"
//! textsearch -i 0.txt 1.txt 2.txt 3.txt 4.txt -f river
//! ```

mod output;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use textsearch_core::Index;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  Print top 10 most frequently occurring words in files:
    textsearch -i 0.txt 1.txt 2.txt 3.txt 4.txt -t 10

  Find word \"river\" in index:
    textsearch -i 0.txt 1.txt 2.txt 3.txt 4.txt -f river";

/// Index words in text files and look them up
#[derive(Parser, Debug)]
#[command(name = "textsearch")]
#[command(version)]
#[command(about = "In-memory word index over text files", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Index words in the given files
    #[arg(short = 'i', long = "index", value_name = "FILE", num_args = 0..)]
    files: Vec<PathBuf>,

    /// Find a word in the index
    #[arg(short = 'f', long = "find", value_name = "WORD")]
    word: Option<String>,

    /// Print the N most frequent words (negative prints nothing)
    #[arg(
        short = 't',
        long = "top",
        value_name = "N",
        allow_negative_numbers = true
    )]
    top: Option<i64>,

    /// Log filter directive, e.g. "info" or "textsearch_core=debug"
    #[arg(long, env = "TEXTSEARCH_LOG", default_value = "warn")]
    log_level: String,
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .compact()
        .init();
}

/// Clamp a requested word count; negative requests select nothing
fn top_count(n: i64) -> usize {
    if n < 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}

/// Run the CLI, returning how many documents could not be read
fn run(cli: &Cli) -> anyhow::Result<usize> {
    let mut index = Index::new();
    let mut failed = 0;

    for path in &cli.files {
        match index.ingest_file(path) {
            Ok(()) => info!(document = %path.display(), "indexed"),
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }

    let stats = index.stats();
    info!(
        documents = stats.num_documents,
        words = stats.num_words,
        occurrences = stats.total_occurrences,
        "index ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(word) = &cli.word {
        output::write_json(&mut out, &output::search_view(&index.search(word)))?;
    }

    if let Some(n) = cli.top {
        let top = index.top_words(top_count(n));
        output::write_json(&mut out, &output::top_words_view(&top))?;
    }

    out.flush()?;
    Ok(failed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!("{failed} document(s) could not be read");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "textsearch", "-i", "a.txt", "b.txt", "-f", "river", "-t", "5",
        ])
        .unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.word.as_deref(), Some("river"));
        assert_eq!(cli.top, Some(5));
    }

    #[test]
    fn test_parse_negative_top() {
        let cli = Cli::try_parse_from(["textsearch", "--top", "-3"]).unwrap();
        assert_eq!(cli.top, Some(-3));
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_top_count() {
        assert_eq!(top_count(-1), 0);
        assert_eq!(top_count(0), 0);
        assert_eq!(top_count(7), 7);
    }

    #[test]
    fn test_negative_top_selects_nothing() {
        let mut index = Index::new();
        index.ingest("d", "Words and more words.");
        assert!(index.top_words(top_count(-4)).is_empty());
    }
}
