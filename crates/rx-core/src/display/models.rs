//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Process, ProcessStep, ScannedItem, SessionAction, SessionPhase},
    session::Transition,
};

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.completed { "✓" } else { "○" };
        writeln!(f, "### {}. {} {icon}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        if let Some(tag) = &self.animation_tag {
            writeln!(f)?;
            writeln!(f, "- Animation: {tag}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "No steps in this process.");
        }

        writeln!(f, "- Progress: {}/{}", self.completed_count(), self.len())?;
        writeln!(f)?;
        writeln!(f, "## Steps")?;
        writeln!(f)?;
        for step in self.steps() {
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ScannedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.display_name)?;
        writeln!(f)?;
        writeln!(f, "- **Code**: {}", self.scanned_code)?;
        writeln!(f, "- **Asset**: {}", self.asset_reference)?;
        writeln!(f, "- **Scanned**: {}", LocalDateTime(&self.timestamp))?;
        writeln!(f)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.status_text.is_empty() {
            writeln!(f, "**{}**", self.status_text)?;
        }
        if let Some(tag) = &self.animation_tag {
            writeln!(f, "Animation: {tag}")?;
        }
        Ok(())
    }
}
