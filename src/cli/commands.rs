use std::fs;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::client::{sample_tree, Client};
use crate::config::{config_template, global_config_path, local_config_path, Settings};
use crate::errors::TreeError;
use crate::node::{Node, NodeOps};
use crate::render::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) => _demo(),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Stats) => _stats(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        None => Ok(()),
    }
}

/// The classic driver: a standalone leaf, the full tree, then grafting the
/// leaf onto the tree after a capability check.
#[instrument]
fn _demo() -> CliResult<()> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);
    let client = Client::with_limit(settings.max_depth);

    let leaf = Node::leaf();
    output::header("Simple object result:");
    output::info(&client.describe(&leaf)?);
    println!();

    let tree = sample_tree();
    output::header("Complex object result:");
    output::info(&client.describe(&tree)?);
    println!();

    output::header("Making the object even more complex:");
    output::info(&client.extend(&tree, &leaf)?);
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    let tree = sample_tree();
    println!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _stats() -> CliResult<()> {
    let tree = sample_tree();
    output::action("depth", &tree.depth());
    output::action("nodes", &tree.node_count());
    output::action("leaves", &tree.leaf_count());
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    let rendered = toml::to_string_pretty(&settings)?;
    output::info(&rendered);
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let path = match global_config_path() {
        Some(path) => path,
        None => {
            return Err(CliError::InvalidArgs(
                "cannot determine a config directory on this system".to_string(),
            ))
        }
    };

    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(TreeError::Io)?;
    }
    fs::write(&path, config_template()).map_err(TreeError::Io)?;

    output::success(&format!("created {}", path.display()));
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    if let Some(global) = global_config_path() {
        let marker = if global.exists() { "(exists)" } else { "(not found)" };
        output::detail(&format!("global: {} {}", global.display(), marker));
    }

    let local = local_config_path();
    let marker = if local.exists() { "(exists)" } else { "(not found)" };
    output::detail(&format!("local:  {} {}", local.display(), marker));
    Ok(())
}
