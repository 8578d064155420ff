//! Interactive guided session.
//!
//! This is the display layer for a [`SessionController`]: it shows the
//! current status, offers only the commands valid in the current phase, and
//! forwards accepted commands to the controller. Commands map onto the
//! screen buttons of the guide:
//!
//! | Phase      | Commands      | Action            |
//! |------------|---------------|-------------------|
//! | idle       | `start`       | start             |
//! | inprogress | `next`        | advance           |
//! | inprogress | `back`        | reset             |
//! | finished   | `over`        | reset             |
//! | any        | `quit`        | end the session   |

use std::{io::BufRead, str::FromStr};

use anyhow::{Context, Result};
use log::debug;
use rx_core::{
    display::OperationStatus, ScannedItem, SessionAction, SessionController, SessionPhase,
};

use crate::renderer::TerminalRenderer;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCommand {
    Start,
    Next,
    Back,
    Over,
    Quit,
}

impl GuideCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideCommand::Start => "start",
            GuideCommand::Next => "next",
            GuideCommand::Back => "back",
            GuideCommand::Over => "over",
            GuideCommand::Quit => "quit",
        }
    }

    /// Commands offered in `phase`.
    pub fn offered(phase: SessionPhase) -> &'static [GuideCommand] {
        match phase {
            SessionPhase::Idle => &[GuideCommand::Start, GuideCommand::Quit],
            SessionPhase::InProgress => {
                &[GuideCommand::Next, GuideCommand::Back, GuideCommand::Quit]
            }
            SessionPhase::Finished => &[GuideCommand::Over, GuideCommand::Quit],
        }
    }

    /// The session action this command triggers in `phase`, if it is offered
    /// there. `quit` has no session action.
    pub fn action_in(self, phase: SessionPhase) -> Option<SessionAction> {
        if !Self::offered(phase).contains(&self) {
            return None;
        }
        let action = match self {
            GuideCommand::Start => SessionAction::Start,
            GuideCommand::Next => SessionAction::Advance,
            GuideCommand::Back | GuideCommand::Over => SessionAction::Reset,
            GuideCommand::Quit => return None,
        };
        debug_assert!(phase.allows(action));
        Some(action)
    }
}

impl FromStr for GuideCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "s" => Ok(GuideCommand::Start),
            "next" | "n" => Ok(GuideCommand::Next),
            "back" | "b" => Ok(GuideCommand::Back),
            "over" | "o" => Ok(GuideCommand::Over),
            "quit" | "q" | "exit" => Ok(GuideCommand::Quit),
            other => Err(format!("Unknown command '{other}'")),
        }
    }
}

pub struct Guide<'a> {
    item: &'a ScannedItem,
    session: SessionController,
    renderer: &'a TerminalRenderer,
}

impl<'a> Guide<'a> {
    pub fn new(
        item: &'a ScannedItem,
        session: SessionController,
        renderer: &'a TerminalRenderer,
    ) -> Self {
        Self {
            item,
            session,
            renderer,
        }
    }

    /// Processes commands until `quit` or end of input.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<()> {
        let process = self.session.process();
        self.renderer.render(&format!(
            "# {}\n\n{} ({} steps)\n\n",
            self.item.display_name,
            process.name,
            process.len()
        ));
        self.prompt();

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<GuideCommand>() {
                Ok(command) => command,
                Err(message) => {
                    self.renderer
                        .render(&OperationStatus::failure(message).to_string());
                    self.prompt();
                    continue;
                }
            };

            if command == GuideCommand::Quit {
                break;
            }

            let phase = self.session.current_phase();
            let Some(action) = command.action_in(phase) else {
                self.renderer.render(
                    &OperationStatus::failure(format!(
                        "Action '{}' is not available while {phase}",
                        command.as_str()
                    ))
                    .to_string(),
                );
                self.prompt();
                continue;
            };

            debug!("Guide command '{}' -> {action}", command.as_str());
            let transition = self.session.apply(action);
            if action == SessionAction::Reset {
                self.renderer
                    .render(&OperationStatus::success("Session reset.").to_string());
            } else {
                self.renderer.render(&transition.to_string());
                if transition.is_finished() {
                    self.renderer.render(
                        &OperationStatus::success(format!(
                            "Completed '{}'",
                            self.session.process().name
                        ))
                        .to_string(),
                    );
                }
            }
            self.prompt();
        }

        let process = self.session.process();
        self.renderer.render(&format!(
            "Progress: {}/{}\n",
            process.completed_count(),
            process.len()
        ));
        Ok(())
    }

    fn prompt(&self) {
        let phase = self.session.current_phase();
        let offered: Vec<&str> = GuideCommand::offered(phase)
            .iter()
            .map(GuideCommand::as_str)
            .collect();
        self.renderer.render(&format!(
            "{} | Actions: {}\n",
            phase.with_icon(),
            offered.join(", ")
        ));
    }
}
