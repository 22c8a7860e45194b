//! Command-line configuration for the `sssp` binary.

use std::path::PathBuf;

use crate::{Error, Result};

pub const USAGE: &str = "\
Find shortest paths using Dijkstra's algorithm

Usage: sssp <INPUT_FILE> --start <VERTEX> [OPTIONS]

Options:
  -s, --start <VERTEX>   Start vertex
  -e, --end <VERTEX>     End vertex (shows all distances if omitted)
  -o, --output <FILE>    Save the full results to a file
      --strict           Refuse graphs with negative edges
  -h, --help             Print this help

Logging is controlled with RUST_LOG (e.g. RUST_LOG=debug).";

/// Options for a single run of the command-line tool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Edge list or JSON graph file
    pub input: PathBuf,
    pub start: String,
    pub end: Option<String>,
    pub output: Option<PathBuf>,
    /// Treat negative edges as an error instead of a warning
    pub strict: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Help,
    Run(CliConfig),
}

impl CliConfig {
    /// Parses arguments, excluding the program name
    pub fn from_args<I>(args: I) -> Result<CliCommand>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CliConfig::default();
        let mut input = None;
        let mut start = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| Error::InvalidArguments(format!("{} requires a value", name)))
            };

            match arg.as_str() {
                "-h" | "--help" => return Ok(CliCommand::Help),
                "-s" | "--start" => start = Some(value(arg.as_str())?),
                "-e" | "--end" => config.end = Some(value(arg.as_str())?),
                "-o" | "--output" => config.output = Some(PathBuf::from(value(arg.as_str())?)),
                "--strict" => config.strict = true,
                flag if flag.starts_with('-') => {
                    return Err(Error::InvalidArguments(format!("unknown option {}", flag)));
                }
                _ if input.is_none() => input = Some(PathBuf::from(&arg)),
                _ => {
                    return Err(Error::InvalidArguments(format!("unexpected argument {}", arg)));
                }
            }
        }

        config.input =
            input.ok_or_else(|| Error::InvalidArguments("missing input file".to_string()))?;
        config.start =
            start.ok_or_else(|| Error::InvalidArguments("--start is required".to_string()))?;

        Ok(CliCommand::Run(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand> {
        CliConfig::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_full_command_line() {
        let command = parse(&["graph.txt", "-s", "A", "--end", "F", "-o", "out.txt", "--strict"]).unwrap();

        assert_eq!(
            command,
            CliCommand::Run(CliConfig {
                input: PathBuf::from("graph.txt"),
                start: "A".to_string(),
                end: Some("F".to_string()),
                output: Some(PathBuf::from("out.txt")),
                strict: true,
            })
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--help"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_missing_start() {
        assert!(matches!(parse(&["graph.txt"]), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(parse(&["graph.txt", "--start"]), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_unknown_option() {
        assert!(matches!(parse(&["graph.txt", "-s", "A", "--plot"]), Err(Error::InvalidArguments(_))));
    }
}
