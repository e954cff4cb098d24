use clap::Parser;
use file_adapter::FileLineSource;
use stdout_adapter::StdoutTimingWriter;
use timings_core::application::ExtractionServiceImpl;
use timings_core::ports::{LineSource, TimingWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI tool to extract the final per-query timings from a benchmark timing log
#[derive(Parser, Debug)]
#[command(name = "extract-timings")]
#[command(about = "Prints the final `Run Time (s): real` value of every query block, one per line")]
struct Cli {
    /// Path to the benchmark timing log
    #[arg(default_value = "time.txt")]
    input: String,
}

fn init_tracing() {
    // RUST_LOG=timings_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let line_source: Box<dyn LineSource> = Box::new(FileLineSource::new(cli.input.clone()));
    let timing_writer: Box<dyn TimingWriter> = Box::new(StdoutTimingWriter::new());

    let service = ExtractionServiceImpl::new(line_source, timing_writer);

    match service.execute_extraction() {
        Ok(record) => {
            info!(input = %cli.input, timings = record.len(), "extraction finished");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_default_input() {
        let cli = Cli::try_parse_from(["extract-timings"]).unwrap();
        assert_eq!(cli.input, "time.txt");
    }

    #[test]
    fn test_cli_explicit_input() {
        let cli = Cli::try_parse_from(["extract-timings", "imdb/time.txt"]).unwrap();
        assert_eq!(cli.input, "imdb/time.txt");
    }

    #[test]
    fn test_cli_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["extract-timings", "a.txt", "b.txt"]).is_err());
    }
}
