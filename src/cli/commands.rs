//! Subcommand handlers and the default render command.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use crate::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::options::{self, Options, OptionsError};
use crate::plot::{self, FunctionPreset};
use crate::printer::Printer;

/// Errors surfaced to the user by the binary.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("Config file already exists: {}\nUse 'termgraph config show' to view current settings.", .0.display())]
    ConfigExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Render the graph described by `args` to stdout.
pub fn run(args: &Args) -> Result<(), RunError> {
    let config = load_config(args.config.as_deref())?;
    let opts = resolve_options(args, &config)?;
    let grid = plot::render(&opts.function, &opts.viewport());

    let printer = Printer::new(opts.color_enabled, opts.intercept_char);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    printer.print(&grid, &mut out)?;
    Ok(())
}

/// Load the config file.
///
/// A path named with `--config` must exist and parse. The default file is
/// optional, and a broken one only produces a warning.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from_explicit(path),
        None => match Config::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("{}; using default settings", e);
                eprintln!("Warning: {}", e);
                eprintln!("Using default settings.\n");
                Ok(Config::default())
            }
        },
    }
}

/// Merge settings: CLI args > config file > built-in defaults.
pub fn resolve_options(args: &Args, config: &Config) -> Result<Options, OptionsError> {
    let defaults = Options::default();
    let graph = &config.graph;

    let intercept_char = match (args.intercept_char, graph.intercept_char.as_deref()) {
        (Some(c), _) => c,
        (None, Some(s)) => options::parse_intercept_char(s)?,
        (None, None) => defaults.intercept_char,
    };

    let function = match (args.function, graph.function.as_deref()) {
        (Some(f), _) => FunctionPreset::from(f),
        (None, Some(name)) => options::parse_function(name)?,
        (None, None) => defaults.function,
    };

    // --no-color wins over the config file
    let color_enabled = !args.no_color && config.display.color.unwrap_or(defaults.color_enabled);

    let opts = Options {
        color_enabled,
        scale: args.scale.or(graph.scale).unwrap_or(defaults.scale),
        height: args.height.or(graph.height).unwrap_or(defaults.height),
        width: args.width.or(graph.width).unwrap_or(defaults.width),
        intercept_char,
        function,
    };
    opts.validate()?;
    Ok(opts)
}

/// List available functions and print them to stdout.
pub fn list_functions() {
    println!("Available functions:");
    for preset in FunctionPreset::all() {
        let marker = if *preset == FunctionPreset::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<12} {}{}", preset.name(), preset.formula(), marker);
    }
    println!();
    println!("Use --function <name> to select a function.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, args: &Args) -> Result<(), RunError> {
    match action {
        ConfigAction::Show => {
            let config = load_config(args.config.as_deref())?;
            let opts = resolve_options(args, &config)?;
            print!("{}", describe_options(&opts));
            println!();

            let config_path = args.config.clone().unwrap_or_else(get_config_path);
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let config_path = args.config.clone().unwrap_or_else(get_config_path);
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Write the default config file to `path`, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<(), RunError> {
    if path.exists() {
        return Err(RunError::ConfigExists(path.to_path_buf()));
    }
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

/// Effective settings, one per line.
pub fn describe_options(opts: &Options) -> String {
    format!(
        "Current configuration:\n  Function: {} ({})\n  Scale: {}\n  Width: {}\n  Height: {}\n  Intercept char: '{}'\n  Color: {}\n",
        opts.function.name(),
        opts.function.formula(),
        opts.scale,
        opts.width,
        opts.height,
        opts.intercept_char,
        if opts.color_enabled { "yes" } else { "no" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_defaults() {
        let args = Args::parse_from(["termgraph"]);
        let opts = resolve_options(&args, &Config::default()).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_config_fills_missing_args() {
        let config =
            Config::from_toml("[graph]\nscale = 1.0\nwidth = 20\nfunction = \"linear\"\n").unwrap();
        let args = Args::parse_from(["termgraph"]);
        let opts = resolve_options(&args, &config).unwrap();
        assert_eq!(opts.scale, 1.0);
        assert_eq!(opts.width, 20);
        assert_eq!(opts.height, 30);
        assert_eq!(opts.function, FunctionPreset::Linear);
    }

    #[test]
    fn test_args_override_config() {
        let config = Config::from_toml(
            "[graph]\nscale = 1.0\nintercept_char = \"+\"\nfunction = \"linear\"\n",
        )
        .unwrap();
        let args = Args::parse_from(["termgraph", "-s", "3", "-i", "x", "-f", "sine"]);
        let opts = resolve_options(&args, &config).unwrap();
        assert_eq!(opts.scale, 3.0);
        assert_eq!(opts.intercept_char, 'x');
        assert_eq!(opts.function, FunctionPreset::Sine);
    }

    #[test]
    fn test_no_color_beats_config() {
        let config = Config::from_toml("[display]\ncolor = true\n").unwrap();
        let args = Args::parse_from(["termgraph", "--no-color"]);
        assert!(!resolve_options(&args, &config).unwrap().color_enabled);

        let config = Config::from_toml("[display]\ncolor = false\n").unwrap();
        let args = Args::parse_from(["termgraph"]);
        assert!(!resolve_options(&args, &config).unwrap().color_enabled);
    }

    #[test]
    fn test_invalid_config_values_are_rejected() {
        let args = Args::parse_from(["termgraph"]);

        let config = Config::from_toml("[graph]\nheight = 10\n").unwrap();
        assert!(matches!(
            resolve_options(&args, &config),
            Err(OptionsError::DimensionTooSmall { name: "height", .. })
        ));

        let config = Config::from_toml("[graph]\nscale = -1.0\n").unwrap();
        assert!(matches!(
            resolve_options(&args, &config),
            Err(OptionsError::InvalidScale(_))
        ));

        let config = Config::from_toml("[graph]\nfunction = \"tan\"\n").unwrap();
        assert!(matches!(
            resolve_options(&args, &config),
            Err(OptionsError::UnknownFunction(_))
        ));
    }

    #[test]
    fn test_empty_intercept_char_in_config_is_default() {
        let config = Config::from_toml("[graph]\nintercept_char = \"\"\n").unwrap();
        let args = Args::parse_from(["termgraph"]);
        assert_eq!(resolve_options(&args, &config).unwrap().intercept_char, '@');
    }

    #[test]
    fn test_describe_options() {
        let text = describe_options(&Options::default());
        assert!(text.contains("Function: square (f(x) = x^2)"));
        assert!(text.contains("Scale: 4.5"));
        assert!(text.contains("Intercept char: '@'"));
        assert!(text.contains("Color: yes"));
    }
}
