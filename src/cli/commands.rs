//! Command dispatch for the `pov` binary.

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, ConfigError, OutputFormat, Settings};
use crate::domain::{parse, DomainError, ToTermTree, Tree};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let format = cli.format.unwrap_or(settings.format);
    match &cli.command {
        Some(Commands::Show { tree }) => _show(tree, format),
        Some(Commands::Reroot { tree, label }) => _reroot(tree, label, format),
        Some(Commands::Path { tree, from, to }) => _path(tree, from, to, &settings.path_separator),
        Some(Commands::Leaves { tree }) => _leaves(tree),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `pov --help`".to_string(),
        )),
    }
}

#[instrument]
fn _show(notation: &str, format: OutputFormat) -> CliResult<()> {
    let tree = parse(notation)?;
    output::info(&render_tree(&tree, format));
    Ok(())
}

#[instrument]
fn _reroot(notation: &str, label: &str, format: OutputFormat) -> CliResult<()> {
    let tree = reroot(notation, label)?;
    output::info(&render_tree(&tree, format));
    Ok(())
}

#[instrument]
fn _path(notation: &str, from: &str, to: &str, separator: &str) -> CliResult<()> {
    let labels = path(notation, from, to)?;
    output::info(&labels.iter().join(separator));
    Ok(())
}

#[instrument]
fn _leaves(notation: &str) -> CliResult<()> {
    let tree = parse(notation)?;
    debug!(depth = tree.depth(), nodes = tree.len(), "parsed");
    for leaf in tree.leaf_nodes() {
        output::info(&leaf);
    }
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            let path = require_config_path(global_config_path())?;
            output::info(&path.display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn require_config_path(path: Option<PathBuf>) -> CliResult<PathBuf> {
    path.ok_or_else(|| ConfigError::NoConfigDir.into())
}

/// Parses `notation` and re-roots it at `label`.
pub fn reroot(notation: &str, label: &str) -> CliResult<Tree> {
    let mut tree = parse(notation)?;
    if tree.from_point_of_view(label).is_none() {
        return Err(DomainError::LabelNotFound(label.to_string()).into());
    }
    Ok(tree)
}

/// Parses `notation` and finds the path between `from` and `to`.
pub fn path(notation: &str, from: &str, to: &str) -> CliResult<Vec<String>> {
    let mut tree = parse(notation)?;
    for label in [from, to] {
        if tree.find(label).is_none() {
            return Err(DomainError::LabelNotFound(label.to_string()).into());
        }
    }
    tree.path_to(from, to)
        .ok_or_else(|| DomainError::LabelNotFound(to.to_string()).into())
}

pub fn render_tree(tree: &Tree, format: OutputFormat) -> String {
    match format {
        OutputFormat::Sexp => tree.to_string(),
        OutputFormat::Tree => tree.to_term_tree().to_string().trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "(one (two three) (four (five six) seven))";

    #[test]
    fn given_notation_when_rerooting_then_renders_new_root() {
        let tree = reroot("(parent x a b)", "a").unwrap();
        assert_eq!(render_tree(&tree, OutputFormat::Sexp), "(a (parent x b))");
    }

    #[test]
    fn given_unknown_label_when_rerooting_then_reports_not_found() {
        let err = reroot(SAMPLE, "eight").unwrap_err();
        assert!(matches!(
            err,
            CliError::Domain(DomainError::LabelNotFound(ref l)) if l == "eight"
        ));
    }

    #[test]
    fn given_labels_when_searching_path_then_returns_labels() {
        let labels = path(SAMPLE, "three", "seven").unwrap();
        assert_eq!(labels.iter().join(" -> "), "three -> two -> one -> four -> seven");
    }

    #[test]
    fn given_missing_target_when_searching_path_then_names_it() {
        let err = path(SAMPLE, "three", "eight").unwrap_err();
        assert_eq!(err.to_string(), "label not found: eight");
    }

    #[test]
    fn given_malformed_notation_when_running_then_maps_to_dataerr() {
        let err = reroot("(one two", "one").unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_no_config_dir_when_resolving_config_path_then_exits_with_config_code() {
        let err = require_config_path(None).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NoConfigDir)));
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);

        let path = require_config_path(Some(PathBuf::from("/tmp/pov.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/pov.toml"));
    }

    #[test]
    fn given_tree_format_when_rendering_then_draws_boxes() {
        let tree = parse("(a b c)").unwrap();
        let rendered = render_tree(&tree, OutputFormat::Tree);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with('a'));
    }
}
