//! Command handlers: run core operations and render their results.

use std::io;

use anyhow::{Context, Result};
use log::info;
use rx_core::{
    display::{CreateResult, DeleteResult, Templates},
    params::Id,
    Inventory, RxError,
};

use crate::{
    args::{GuideArgs, ItemCommands, TemplateCommands},
    guide::Guide,
    renderer::TerminalRenderer,
};

pub struct Cli {
    inventory: Inventory,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(inventory: Inventory, renderer: TerminalRenderer) -> Self {
        Self {
            inventory,
            renderer,
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Scan(args) => {
                let item = self
                    .inventory
                    .scan_item(&args.into())
                    .await
                    .context("Failed to record scanned item")?;
                self.renderer.render(&CreateResult::new(item).to_string());
            }
            ItemCommands::List => self.list_items().await?,
            ItemCommands::Show(args) => {
                let id: Id = args.into();
                let item = self
                    .inventory
                    .get_item(&id)
                    .await?
                    .ok_or(RxError::ItemNotFound { id: id.id })?;
                let process = self.inventory.process_for(&item);
                self.renderer.render(&format!("{item}{process}"));
            }
            ItemCommands::Remove(args) => {
                let item = self.inventory.remove_item(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(item).to_string());
            }
        }
        Ok(())
    }

    pub fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::List => {
                let listing = Templates(self.inventory.catalog()).to_string();
                self.renderer.render(&format!("# Templates\n\n{listing}"));
            }
            TemplateCommands::Show(args) => {
                let process = self.inventory.template(&args.key)?;
                self.renderer.render(&process.to_string());
            }
        }
        Ok(())
    }

    pub async fn list_items(&self) -> Result<()> {
        let items = self.inventory.list_items().await?;
        self.renderer
            .render(&format!("# Added Compounding Instructions\n\n{items}"));
        Ok(())
    }

    /// Runs an interactive session driven by lines from standard input.
    pub async fn guide(&self, args: GuideArgs) -> Result<()> {
        let id: Id = args.into();
        let item = self
            .inventory
            .get_item(&id)
            .await?
            .ok_or(RxError::ItemNotFound { id: id.id })?;
        let session = self.inventory.session_for(&item);

        info!("Guiding '{}' through '{}'", item.display_name, session.process().name);

        let stdin = io::stdin();
        Guide::new(&item, session, &self.renderer).run(stdin.lock())
    }
}
