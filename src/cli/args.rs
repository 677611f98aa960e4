//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Function;
use crate::options;

/// Parse and validate the graph height (at least 20 rows)
fn parse_height(s: &str) -> Result<u32, String> {
    parse_dimension("height", s)
}

/// Parse and validate the graph width (at least 20 columns)
fn parse_width(s: &str) -> Result<u32, String> {
    parse_dimension("width", s)
}

fn parse_dimension(name: &'static str, s: &str) -> Result<u32, String> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;
    options::validate_dimension(name, value).map_err(|e| e.to_string())
}

/// Parse and validate the scale (> 0)
fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    options::validate_scale(scale).map_err(|e| e.to_string())
}

/// Parse the intercept character (empty selects '@')
fn parse_intercept(s: &str) -> Result<char, String> {
    options::parse_intercept_char(s).map_err(|e| e.to_string())
}

/// Plot a function as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "termgraph")]
#[command(version, about = "Plot a function as ASCII art in the terminal", long_about = None)]
#[command(disable_help_flag = true)]
#[command(after_help = "EXAMPLES:
    termgraph                       # x^2 at the default size
    termgraph -f sine -s 3          # sin(x), zoomed in
    termgraph -w 100 -h 40 -i +     # bigger graph, '+' at intercepts
    termgraph --no-color > out.txt  # plain text")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print graph without color
    #[arg(long)]
    pub no_color: bool,

    /// Scale/zoom the graph [default: 4.5]
    #[arg(short, long, value_name = "NUMBER", value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// The height of the graph [default: 30]
    #[arg(short = 'h', long, value_name = "INTEGER", value_parser = parse_height)]
    pub height: Option<u32>,

    /// The width of the graph [default: 60]
    #[arg(short, long, value_name = "INTEGER", value_parser = parse_width)]
    pub width: Option<u32>,

    /// The intercept char on the graph [default: @]
    #[arg(short, long, value_name = "CHARACTER", value_parser = parse_intercept)]
    pub intercept_char: Option<char>,

    /// Function to plot [default: square]
    #[arg(short, long)]
    pub function: Option<Function>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(short = '?', long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the functions that can be plotted
    ListFunctions,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["termgraph"]);
        assert!(!args.no_color);
        assert!(args.scale.is_none());
        assert!(args.height.is_none());
        assert!(args.width.is_none());
        assert!(args.intercept_char.is_none());
        assert!(args.function.is_none());
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_no_color_flag() {
        let args = Args::parse_from(["termgraph", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "termgraph", "-s", "2.5", "-h", "40", "-w", "80", "-i", "+", "-f", "cubic",
        ]);
        assert_eq!(args.scale, Some(2.5));
        assert_eq!(args.height, Some(40));
        assert_eq!(args.width, Some(80));
        assert_eq!(args.intercept_char, Some('+'));
        assert_eq!(args.function, Some(Function::Cubic));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "termgraph",
            "--scale",
            "1",
            "--height",
            "20",
            "--width",
            "20",
            "--intercept-char",
            "x",
            "--function",
            "reciprocal",
        ]);
        assert_eq!(args.scale, Some(1.0));
        assert_eq!(args.height, Some(20));
        assert_eq!(args.width, Some(20));
        assert_eq!(args.intercept_char, Some('x'));
        assert_eq!(args.function, Some(Function::Reciprocal));
    }

    #[test]
    fn test_args_empty_intercept_char_is_default() {
        let args = Args::parse_from(["termgraph", "-i", ""]);
        assert_eq!(args.intercept_char, Some('@'));
    }

    #[test]
    fn test_args_rejects_small_dimensions() {
        let err = Args::try_parse_from(["termgraph", "--height", "19"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let err = Args::try_parse_from(["termgraph", "-w", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_args_rejects_bad_scale() {
        assert!(Args::try_parse_from(["termgraph", "-s", "0"]).is_err());
        assert!(Args::try_parse_from(["termgraph", "-s", "-3"]).is_err());
        assert!(Args::try_parse_from(["termgraph", "-s", "abc"]).is_err());
    }

    #[test]
    fn test_args_rejects_unknown_argument() {
        let err = Args::try_parse_from(["termgraph", "--zoom"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_args_help_flags() {
        let err = Args::try_parse_from(["termgraph", "-?"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let err = Args::try_parse_from(["termgraph", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["termgraph", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["termgraph", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_list_functions_subcommand() {
        let args = Args::parse_from(["termgraph", "list-functions"]);
        assert!(matches!(args.command, Some(Command::ListFunctions)));
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["termgraph", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));

        let args = Args::parse_from(["termgraph", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }
}
