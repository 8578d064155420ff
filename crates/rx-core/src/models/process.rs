//! Process model definition and completion tracking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ProcessStep;
use crate::error::{Result, RxError};

/// An ordered compounding procedure.
///
/// Step order is fixed at construction; only the per-step completion flags
/// change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Process {
    /// Label for the whole procedure
    pub name: String,

    #[serde(default)]
    steps: Vec<ProcessStep>,
}

impl Process {
    /// Creates a process from its steps in display order.
    ///
    /// Step ids are taken as given. Processes built in code must pass
    /// [`validate`](Self::validate) before they drive a session; templates
    /// loaded from JSON are validated on load.
    ///
    /// ```
    /// use rx_core::{Process, ProcessStep};
    ///
    /// let process = Process::new(
    ///     "Flush",
    ///     vec![
    ///         ProcessStep::new(1, "Swab", "Swab the port."),
    ///         ProcessStep::new(1, "Flush", "Flush slowly."),
    ///     ],
    /// );
    /// assert!(process.validate().is_err());
    /// ```
    pub fn new(name: impl Into<String>, steps: Vec<ProcessStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Steps in sequence order.
    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a sequence position.
    pub fn step(&self, index: usize) -> Option<&ProcessStep> {
        self.steps.get(index)
    }

    /// Step with the given id.
    pub fn find(&self, step_id: u32) -> Option<&ProcessStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    /// First step, in sequence order, that is not yet completed.
    pub fn next_incomplete_step(&self) -> Option<&ProcessStep> {
        self.steps.iter().find(|step| !step.completed)
    }

    /// Marks the step with `step_id` as completed.
    ///
    /// Unknown ids are ignored and repeated calls have no further effect.
    pub fn mark_complete(&mut self, step_id: u32) {
        if let Some(step) = self.steps.iter_mut().find(|step| step.id == step_id) {
            step.completed = true;
        }
    }

    /// True when every step is completed. A process without steps is complete.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }

    /// Checks the invariants a hand-written template may break: a non-empty
    /// name and positive, unique step ids.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RxError::invalid_input("name").with_reason("Process name cannot be empty"));
        }

        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if step.id == 0 {
                return Err(RxError::invalid_input("steps.id").with_reason(format!(
                    "Step '{}' in '{}' must have a positive id",
                    step.title, self.name
                )));
            }
            if !seen.insert(step.id) {
                return Err(RxError::invalid_input("steps.id").with_reason(format!(
                    "Duplicate step id {} in '{}'",
                    step.id, self.name
                )));
            }
        }

        Ok(())
    }
}
