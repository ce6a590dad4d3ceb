//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{config, create, delete, get, list, update};

/// Manage mahasiswa (student) records on a REST backend.
#[derive(Parser, Debug)]
#[command(name = "mahasiswa")]
#[command(author, version = env!("MAHASISWA_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend base URL (http://, https:// or file://)
    #[arg(long, env = "MAHASISWA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records
    List(list::ListArgs),

    /// Show one record
    Get(get::GetArgs),

    /// Create a new record
    Create(create::CreateArgs),

    /// Edit fields of an existing record
    Update(update::UpdateArgs),

    /// Delete a record and show the remaining list
    Delete(delete::DeleteArgs),

    /// Show or change stored settings
    Config(config::ConfigCommand),
}
