use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::display::label;
use crate::domain::MenuTreeConvert;
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree {
            path,
            flat,
            sections,
        }) => _tree(cli, path.as_deref(), *flat, *sections),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

#[instrument(skip(cli))]
fn _tree(cli: &Cli, path: Option<&str>, flat: bool, sections: bool) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);
    let service = container.menu_service();

    let menu = if sections {
        service.load_from_config(&container.modules)
    } else {
        service.load(&container.modules)
    };
    let node = match path {
        Some(path) => service.find(&menu, path)?,
        None => &menu,
    };
    debug!(root = node.id(), "printing menu");

    if flat {
        for item in node.depth_first() {
            output::info(&format!("{}{}", "  ".repeat(item.depth), label(item.node)));
        }
    } else {
        output::info(&node.to_tree_string());
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config files");
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "found" } else { "missing" };
                    output::action("global", &format!("{} ({})", path.display(), state));
                }
                None => output::action("global", "no config directory on this platform"),
            }
            if let Some(path) = &cli.config {
                output::action("file", &path.display());
            }
            output::detail("environment: WEBMENU_ROOT_ID");
        }
    }
    Ok(())
}
