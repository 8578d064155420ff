//! Augmented Rx CLI
//!
//! Terminal front end for recording scanned medication codes and walking
//! through their compounding procedures.

mod args;
mod cli;
mod guide;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use rx_core::InventoryBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        templates,
        no_color,
        command,
    } = Args::parse();

    let inventory = InventoryBuilder::new()
        .with_database_path(database_file)
        .with_templates_file(templates)
        .build()
        .await
        .context("Failed to initialize inventory")?;

    info!("Augmented Rx started");

    let cli = Cli::new(inventory, TerminalRenderer::new(!no_color));

    match command {
        Some(Commands::Item { command }) => cli.handle_item_command(command).await,
        Some(Commands::Template { command }) => cli.handle_template_command(command),
        Some(Commands::Guide(args)) => cli.guide(args).await,
        None => cli.list_items().await,
    }
}
