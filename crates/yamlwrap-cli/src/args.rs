use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use yamlwrap_engine::Operation;

#[derive(Parser, Debug)]
#[command(name = "yamlwrap")]
#[command(about = "Wrap, unwrap and rewrap Markdown prose inside YAML documents")]
#[command(
    after_long_help = "Typical flow: `yamlwrap diff notes.yaml --rewrap` to preview, then `yamlwrap write notes.yaml --rewrap --in-place`."
)]
pub struct Cli {
    /// Log every changed scalar
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of $YAMLWRAP_CONFIG or ~/.config/yamlwrap/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the version
    Version,
    #[command(
        about = "Transform a YAML file and write the result",
        after_help = "Example:\n    yamlwrap write notes.yaml --rewrap --width 72 --in-place"
    )]
    Write(WriteArgs),
    #[command(
        about = "Show what a transformation would change",
        after_help = "Example:\n    yamlwrap diff notes.yaml --unwrap --key body"
    )]
    Diff(DiffArgs),
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// YAML file to read
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    #[command(flatten)]
    pub operation: OperationArgs,

    #[command(flatten)]
    pub destination: DestinationArgs,

    #[command(flatten)]
    pub options: TransformArgs,
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// YAML file to read
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    #[command(flatten)]
    pub operation: OperationArgs,

    /// Compare the source against this file instead of its transformation
    #[arg(long, value_name = "FILE")]
    pub reference: Option<PathBuf>,

    #[command(flatten)]
    pub options: TransformArgs,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct OperationArgs {
    /// Reflow paragraphs, list items, quotes and HTML text to the line width
    #[arg(long)]
    pub wrap: bool,

    /// Put each paragraph, list item, quote and HTML text on one line
    #[arg(long)]
    pub unwrap: bool,

    /// Unwrap, then wrap
    #[arg(long)]
    pub rewrap: bool,
}

impl OperationArgs {
    pub fn operation(&self) -> Operation {
        if self.wrap {
            Operation::Wrap
        } else if self.unwrap {
            Operation::Unwrap
        } else {
            Operation::Rewrap
        }
    }
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DestinationArgs {
    /// Overwrite the source file
    #[arg(long)]
    pub in_place: bool,

    /// Write the result to this file
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Line width for wrapping (default: 70, or `width` from the config file)
    #[arg(long, value_name = "N")]
    pub width: Option<NonZeroUsize>,

    /// Only transform values under this top-level key (repeatable)
    #[arg(long = "key", value_name = "KEY", conflicts_with = "exclude_keys")]
    pub keys: Vec<String>,

    /// Leave values under this top-level key alone (repeatable)
    #[arg(long = "exclude-key", value_name = "KEY")]
    pub exclude_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_operation_flags_are_exclusive() {
        let result = Cli::try_parse_from(["yamlwrap", "diff", "a.yaml", "--wrap", "--unwrap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_operation_flag_is_required() {
        let result = Cli::try_parse_from(["yamlwrap", "diff", "a.yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_needs_a_destination() {
        let result = Cli::try_parse_from(["yamlwrap", "write", "a.yaml", "--rewrap"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from([
            "yamlwrap",
            "write",
            "a.yaml",
            "--rewrap",
            "--in-place",
            "--target",
            "b.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let result = Cli::try_parse_from(["yamlwrap", "diff", "a.yaml", "--wrap", "--width", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_key_and_exclude_key_conflict() {
        let result = Cli::try_parse_from([
            "yamlwrap",
            "diff",
            "a.yaml",
            "--wrap",
            "--key",
            "body",
            "--exclude-key",
            "notes",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parses_full_write_invocation() {
        let cli = Cli::try_parse_from([
            "yamlwrap",
            "--verbose",
            "write",
            "a.yaml",
            "--unwrap",
            "--target",
            "out/b.yaml",
            "--width",
            "60",
            "--key",
            "body",
            "--key",
            "summary",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Write(args) = cli.command else {
            panic!("expected write, got {:?}", cli.command);
        };
        assert_eq!(args.operation.operation(), Operation::Unwrap);
        assert_eq!(args.destination.target, Some(PathBuf::from("out/b.yaml")));
        assert_eq!(args.options.width, NonZeroUsize::new(60));
        assert_eq!(args.options.keys, vec!["body", "summary"]);
    }
}
