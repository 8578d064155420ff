//! Command-line argument definitions using clap.
//!
//! Argument structs here carry clap attributes only; each converts into the
//! framework-free parameter types of `rx_core::params` via `From`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rx_core::params::{Id, ScanItem};

/// Augmented Rx: step-by-step medication compounding guide
///
/// Records scanned medication codes and walks through the compounding
/// procedure chosen for each one.
#[derive(Parser)]
#[command(version, about, name = "arx")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/augmented-rx/items.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file with additional process templates
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage scanned items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Inspect process templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Walk through the procedure for a scanned item
    #[command(alias = "g")]
    Guide(GuideArgs),
}

/// Record a scanned medication code
#[derive(clap::Args)]
pub struct ScanItemArgs {
    /// Decoded payload of the scanned QR code
    pub code: String,
    /// Name shown in listings (defaults to "<code> Instruction")
    #[arg(short, long)]
    pub name: Option<String>,
    /// Reference of the 3D asset to overlay (defaults to "bottle")
    #[arg(short, long)]
    pub asset: Option<String>,
}

impl From<ScanItemArgs> for ScanItem {
    fn from(val: ScanItemArgs) -> Self {
        ScanItem {
            code: val.code,
            display_name: val.name,
            asset_reference: val.asset,
        }
    }
}

/// Identify a scanned item
#[derive(clap::Args)]
pub struct ItemIdArgs {
    #[arg(help = "Unique identifier of the scanned item")]
    pub id: u64,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Record a scanned code
    #[command(alias = "add")]
    Scan(ScanItemArgs),
    /// List scanned items, oldest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a scanned item and its procedure
    #[command(alias = "s")]
    Show(ItemIdArgs),
    /// Remove a scanned item
    #[command(aliases = ["d", "rm"])]
    Remove(ItemIdArgs),
}

/// Identify a process template
#[derive(clap::Args)]
pub struct TemplateKeyArgs {
    #[arg(help = "Key of the template, e.g. 'saline'")]
    pub key: String,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List available templates
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the steps of a template
    #[command(alias = "s")]
    Show(TemplateKeyArgs),
}

/// Run an interactive guided session
///
/// Reads one command per line from standard input: start, next, back, over,
/// quit. Only the commands valid for the current phase are accepted.
#[derive(clap::Args)]
pub struct GuideArgs {
    #[arg(help = "Unique identifier of the scanned item to guide")]
    pub id: u64,
}

impl From<GuideArgs> for Id {
    fn from(val: GuideArgs) -> Self {
        Id { id: val.id }
    }
}
