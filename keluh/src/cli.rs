//! Command-line interface definitions for the `keluh` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use keluh_core::ids::CategoryId;


/// Client command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "keluh",
    author,
    about = "Manages complaint categories of the Keluh Provinsi dashboard.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./data/configuration.toml`,
    /// and to built-in defaults if that file doesn't exist.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        global = true,
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    /// Takes precedence over `[session].access_token` in the configuration file.
    #[arg(
        long = "token",
        env = "KELUH_ACCESS_TOKEN",
        hide_env_values = true,
        global = true,
        help = "Access token to authenticate with."
    )]
    pub access_token: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}


#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Lists all categories, optionally only those matching a keyword.
    List {
        #[arg(
            short = 's',
            long = "search",
            help = "Only show categories whose name or description contains this keyword."
        )]
        search: Option<String>,
    },

    /// Creates a new category.
    Create {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "description")]
        description: String,
    },

    /// Edits an existing category. Omitted fields keep their current value.
    Update {
        #[arg(long = "id")]
        id: CategoryId,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,
    },

    /// Deletes a category after asking for confirmation.
    Delete {
        #[arg(long = "id")]
        id: CategoryId,

        #[arg(
            short = 'y',
            long = "yes",
            action = ArgAction::SetTrue,
            help = "Delete without asking for confirmation."
        )]
        yes: bool,
    },
}
