use anyhow::{Context, Result};
use similar::TextDiff;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use yamlwrap_config::Config;
use yamlwrap_engine::{
    DEFAULT_WIDTH, SelectionPolicy, TransformConfig, io, lint, transform_if_changed,
};

use crate::args::{Cli, Command, DiffArgs, OperationArgs, TransformArgs, WriteArgs};

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Version => {
            println!("yamlwrap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Write(args) => write(args, &config),
        Command::Diff(args) => diff(args, &config),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            // An explicitly named file has to exist.
            if !path.exists() {
                anyhow::bail!("Config file '{}' does not exist", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn write(args: WriteArgs, config: &Config) -> Result<()> {
    let source = io::read_document(&args.source)?;
    let transform_config = build_transform_config(&args.operation, &args.options, config)?;

    let output = match transform_if_changed(&source, &transform_config)
        .with_context(|| format!("Failed to transform '{}'", args.source.display()))?
    {
        Some(cooked) => cooked,
        None => {
            log::info!("{}: nothing to change", args.source.display());
            source
        }
    };

    let target: PathBuf = match args.destination.target {
        Some(target) => target,
        None => args.source.clone(),
    };
    io::write_document(&target, &output)?;
    log::debug!("wrote {}", target.display());
    Ok(())
}

fn diff(args: DiffArgs, config: &Config) -> Result<()> {
    let source = io::read_document(&args.source)?;

    let (other, other_name) = match &args.reference {
        Some(reference) => (
            io::read_document(reference)?,
            reference.display().to_string(),
        ),
        None => {
            let transform_config = build_transform_config(&args.operation, &args.options, config)?;
            let cooked = transform_if_changed(&source, &transform_config)
                .with_context(|| format!("Failed to transform '{}'", args.source.display()))?;
            let name = format!("{} ({})", args.source.display(), args.operation.operation());
            (cooked.unwrap_or_else(|| source.clone()), name)
        }
    };

    print!("{}", unified_diff(&source, &other, &args.source.display().to_string(), &other_name));
    Ok(())
}

/// Unified diff of two texts; empty when they are identical.
pub fn unified_diff(old: &str, new: &str, old_name: &str, new_name: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(old_name, new_name)
        .to_string()
}

fn build_transform_config(
    operation: &OperationArgs,
    options: &TransformArgs,
    config: &Config,
) -> Result<TransformConfig> {
    let width = match (options.width, config.width) {
        (Some(width), _) => width,
        (None, Some(width)) => {
            NonZeroUsize::new(width).context("Configured width must be at least 1")?
        }
        (None, None) => DEFAULT_WIDTH,
    };

    let mut transform_config = TransformConfig::new(operation.operation())
        .with_width(width)
        .with_selection(selection_policy(options, config));

    if let Some(threshold) = config.long_paragraph_threshold {
        transform_config =
            transform_config.with_lint(move |text| lint::warn_on_long_paragraph(text, threshold));
    }

    log::debug!("{transform_config:?}");
    Ok(transform_config)
}

/// Command-line key lists win over the config file's `[selection]` table.
fn selection_policy(options: &TransformArgs, config: &Config) -> SelectionPolicy {
    if !options.keys.is_empty() {
        SelectionPolicy::Include(options.keys.clone())
    } else if !options.exclude_keys.is_empty() {
        SelectionPolicy::Exclude(options.exclude_keys.clone())
    } else if !config.selection.include.is_empty() {
        SelectionPolicy::Include(config.selection.include.clone())
    } else if !config.selection.exclude.is_empty() {
        SelectionPolicy::Exclude(config.selection.exclude.clone())
    } else {
        SelectionPolicy::All
    }
}
