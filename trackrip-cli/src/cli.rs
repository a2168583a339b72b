// trackrip-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Trackrip: lossless stream extraction tool",
    long_about = "Inspects video containers and losslessly extracts single elementary streams using ffprobe/ffmpeg via the trackrip-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists selectable container files in a directory
    List(ListArgs),
    /// Probes a container file and lists its elementary streams
    Streams(StreamsArgs),
    /// Extracts a single stream losslessly into a standalone file
    Extract(ExtractArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory to scan for container files
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Include every file, regardless of extension
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct StreamsArgs {
    /// Container file to probe
    #[arg(required = true, value_name = "INPUT_FILE")]
    pub input_path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Container file to extract from
    #[arg(required = true, value_name = "INPUT_FILE")]
    pub input_path: PathBuf,

    /// Container index of the stream to extract (as listed by `streams`)
    #[arg(short = 's', long = "stream", value_name = "INDEX")]
    pub stream_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_streams_args() {
        let args = vec!["trackrip", "streams", "movie.mkv"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Streams(streams_args) => {
                assert_eq!(streams_args.input_path, PathBuf::from("movie.mkv"));
            }
            other => panic!("Expected Streams command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_extract_args() {
        let args = vec!["trackrip", "extract", "movie.mkv", "--stream", "2"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Extract(extract_args) => {
                assert_eq!(extract_args.input_path, PathBuf::from("movie.mkv"));
                assert_eq!(extract_args.stream_index, 2);
            }
            other => panic!("Expected Extract command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let args = vec!["trackrip", "list"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::List(list_args) => {
                assert_eq!(list_args.directory, PathBuf::from("."));
                assert!(!list_args.all);
            }
            other => panic!("Expected List command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_with_all_flag() {
        let args = vec!["trackrip", "list", "/videos", "--all"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::List(list_args) => {
                assert_eq!(list_args.directory, PathBuf::from("/videos"));
                assert!(list_args.all);
            }
            other => panic!("Expected List command, got {:?}", other),
        }
    }
}
