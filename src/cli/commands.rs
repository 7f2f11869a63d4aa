//! Command dispatch: each subcommand builds a sample recipe and works on it.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, Format, ProjectionArg, SampleArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Comida, Projection, Sample};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show {
            recipe,
            scale,
            divide,
            format,
        }) => show(settings, *recipe, *scale, *divide, *format),
        Some(Commands::Find {
            name,
            recipe,
            projection,
        }) => find(settings, name, *recipe, *projection),
        Some(Commands::Take {
            name,
            recipe,
            times,
        }) => take(settings, name, *recipe, *times),
        Some(Commands::Config { command }) => config(settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Scale a copy of `recipe`; strict mode rejects non-positive factors.
fn scaled(recipe: &Comida, factor: f64, strict: bool) -> CliResult<Comida> {
    if strict {
        let mut copy = recipe.clone();
        copy.try_scale_into(factor)?;
        Ok(copy)
    } else {
        Ok(recipe * factor)
    }
}

fn divided(recipe: &Comida, divisor: f64, strict: bool) -> CliResult<Comida> {
    if strict {
        let mut copy = recipe.clone();
        copy.try_divide_into(divisor)?;
        Ok(copy)
    } else {
        Ok(recipe / divisor)
    }
}

fn print_recipe(settings: &Settings, recipe: &Comida) {
    output::block(&recipe.render_with(&settings.render.options()));
}

#[instrument(skip(settings))]
fn show(
    settings: &Settings,
    recipe: SampleArg,
    scale: Option<f64>,
    divide: Option<f64>,
    format: Format,
) -> CliResult<()> {
    let mut current = Sample::from(recipe).build();
    if let Some(factor) = scale {
        current = scaled(&current, factor, settings.strict)?;
    }
    if let Some(divisor) = divide {
        current = divided(&current, divisor, settings.strict)?;
    }
    debug!(depth = current.depth(), leaves = current.leaf_nodes().len(), "built");

    match format {
        Format::Text => print_recipe(settings, &current),
        Format::Tree => output::info(&current.to_tree()),
        Format::Toml => {
            let text = toml::to_string_pretty(&current.contents())
                .map_err(|e| CliError::Output(e.to_string()))?;
            output::header(&format!("[{}]", current.name()));
            output::block(&text);
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn find(
    settings: &Settings,
    name: &str,
    recipe: SampleArg,
    projection: ProjectionArg,
) -> CliResult<()> {
    let mut current = Sample::from(recipe).build();
    let projection = Projection::from(projection);
    let results = current.project(name, projection);
    if results.is_empty() {
        output::warning(&format!("'{}' not found in {}", name, current.name()));
        return Ok(());
    }

    output::header(&format!("{} of '{}'", projection, name));
    for result in &results {
        output::info(result);
    }
    if projection == Projection::SumQuantities {
        let total: f64 = current.total_quantity(name);
        output::header(&format!("total: {:?}", total));
    }
    if projection.is_mutating() {
        output::header("remaining:");
        print_recipe(settings, &current);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn take(settings: &Settings, name: &str, recipe: SampleArg, times: usize) -> CliResult<()> {
    if times == 0 {
        return Err(CliError::InvalidArgs("--times must be at least 1".into()));
    }
    let mut current = Sample::from(recipe).build();
    for taken in 0..times {
        if current.get_child_by_name(name).is_none() {
            output::warning(&format!(
                "'{}' is gone from {} after {} step(s)",
                name,
                current.name(),
                taken
            ));
            break;
        }
        current -= name;
    }
    if !current.contains(name) {
        output::removed(name);
    }
    print_recipe(settings, &current);
    Ok(())
}

fn config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::block(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
    }
    Ok(())
}
