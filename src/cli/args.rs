//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{Projection, Sample};

/// Recursive recipe trees: merge ingredients, scale whole recipes, search and compare
#[derive(Parser, Debug)]
#[command(name = "comida")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level (-d INFO, -dd DEBUG, -ddd TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .comida.toml
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a sample recipe, optionally scaled
    Show {
        #[arg(short, long, value_enum, default_value_t = SampleArg::Pizza)]
        recipe: SampleArg,
        /// Multiply every quantity by this factor
        #[arg(long)]
        scale: Option<f64>,
        /// Divide every quantity by this divisor
        #[arg(long)]
        divide: Option<f64>,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Project every occurrence of an ingredient
    Find {
        /// Ingredient name
        name: String,
        #[arg(short, long, value_enum, default_value_t = SampleArg::Pizza)]
        recipe: SampleArg,
        #[arg(short, long, value_enum, default_value_t = ProjectionArg::ParentName)]
        projection: ProjectionArg,
    },

    /// Take units of a direct ingredient away
    Take {
        /// Ingredient name
        name: String,
        #[arg(short, long, value_enum, default_value_t = SampleArg::Pizza)]
        recipe: SampleArg,
        /// How many units to take
        #[arg(short = 'n', long, default_value_t = 1)]
        times: usize,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file path
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleArg {
    Pizza,
    Massa,
    Molho,
}

impl From<SampleArg> for Sample {
    fn from(arg: SampleArg) -> Self {
        match arg {
            SampleArg::Pizza => Sample::Pizza,
            SampleArg::Massa => Sample::Massa,
            SampleArg::Molho => Sample::Molho,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Indented `<quantity> <name>` lines
    Text,
    /// Box-drawing tree
    Tree,
    /// Nested quantities as TOML
    Toml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionArg {
    Parent,
    Child,
    ParentName,
    ChildName,
    Quantity,
    Remove,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Parent => Projection::ReturnParent,
            ProjectionArg::Child => Projection::ReturnChild,
            ProjectionArg::ParentName => Projection::ReturnParentName,
            ProjectionArg::ChildName => Projection::ReturnChildName,
            ProjectionArg::Quantity => Projection::SumQuantities,
            ProjectionArg::Remove => Projection::RemoveChild,
        }
    }
}
