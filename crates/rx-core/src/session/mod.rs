//! Guided session state machine.
//!
//! A [`SessionController`] owns one [`Process`] for the duration of a session
//! and walks it forward one step per user action:
//!
//! ```text
//!          start()            advance() at last step
//!   Idle ───────────▶ InProgress ─────────────────────▶ Finished
//!    ▲                 │    ▲  │ advance()                  │
//!    │                 │    └──┘                            │
//!    └─────────────────┴──── reset() ◀──────────────────────┘
//! ```
//!
//! Every transition is total. Calls that are not valid in the current phase
//! leave the state untouched, so a display layer that only offers
//! [`SessionPhase::available_actions`] never observes a no-op.
//!
//! # Examples
//!
//! ```rust
//! use rx_core::{
//!     models::{Process, ProcessStep, SessionPhase},
//!     session::{SessionController, FINISHED_STATUS},
//! };
//!
//! let process = Process::new(
//!     "Saline Solution Dilution",
//!     vec![
//!         ProcessStep::new(1, "Step 1", "Prepare the materials."),
//!         ProcessStep::new(2, "Step 2", "Mix the solution.").with_animation("animateCap"),
//!     ],
//! );
//!
//! let mut session = SessionController::new(process);
//! assert_eq!(session.start().status_text, "Step 1");
//!
//! let next = session.advance();
//! assert_eq!(next.status_text, "Next: Step 2 - Mix the solution.");
//! assert_eq!(next.animation_tag.as_deref(), Some("animateCap"));
//!
//! let done = session.advance();
//! assert!(done.is_finished());
//! assert_eq!(done.status_text, FINISHED_STATUS);
//!
//! session.reset();
//! assert_eq!(session.current_phase(), SessionPhase::Idle);
//! ```

mod transition;


use log::debug;

pub use transition::Transition;

use crate::models::{Process, ProcessStep, SessionAction, SessionPhase};

/// Status shown after `start()` when the process has no steps.
pub const FALLBACK_STATUS: &str = "Preparing the Saline Solution.";

/// Status shown once the last step has been advanced past.
pub const FINISHED_STATUS: &str = "All steps completed!";

/// Drives a single pass through a [`Process`].
#[derive(Debug, Clone)]
pub struct SessionController {
    process: Process,
    phase: SessionPhase,
    current_index: usize,
    status_text: String,
}

impl SessionController {
    /// Creates an idle session over `process`.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            phase: SessionPhase::Idle,
            current_index: 0,
            status_text: String::new(),
        }
    }

    /// Idle → InProgress at the first step.
    ///
    /// The status becomes the first step's title, or [`FALLBACK_STATUS`] for
    /// a process without steps.
    pub fn start(&mut self) -> Transition {
        if self.phase != SessionPhase::Idle {
            debug!("Ignoring start while {}", self.phase.as_str());
            return self.snapshot();
        }

        self.phase = SessionPhase::InProgress;
        self.current_index = 0;
        self.status_text = match self.process.step(0) {
            Some(step) => step.title.clone(),
            None => FALLBACK_STATUS.to_string(),
        };

        debug!("Started '{}' ({} steps)", self.process.name, self.process.len());
        self.emit()
    }

    /// Moves to the next step, or to Finished when the current step is the
    /// last one. The step being left is marked complete.
    pub fn advance(&mut self) -> Transition {
        if self.phase != SessionPhase::InProgress {
            debug!("Ignoring advance while {}", self.phase.as_str());
            return self.snapshot();
        }

        if let Some(id) = self.current_step().map(|step| step.id) {
            self.process.mark_complete(id);
        }

        if let Some(next) = self.process.step(self.current_index + 1) {
            self.status_text = format!("Next: {} - {}", next.title, next.description);
            self.current_index += 1;
            debug!("Advanced '{}' to index {}", self.process.name, self.current_index);
        } else {
            self.phase = SessionPhase::Finished;
            self.status_text = FINISHED_STATUS.to_string();
            debug!("Finished '{}'", self.process.name);
        }

        self.emit()
    }

    /// Returns to Idle from any phase.
    ///
    /// Step completion flags on the owned process are left as they are.
    pub fn reset(&mut self) {
        debug!("Resetting '{}' from {}", self.process.name, self.phase.as_str());
        self.phase = SessionPhase::Idle;
        self.current_index = 0;
        self.status_text.clear();
    }

    /// Dispatches a user action to the matching transition.
    pub fn apply(&mut self, action: SessionAction) -> Transition {
        match action {
            SessionAction::Start => self.start(),
            SessionAction::Advance => self.advance(),
            SessionAction::Reset => {
                self.reset();
                self.snapshot()
            }
        }
    }

    pub fn current_phase(&self) -> SessionPhase {
        self.phase
    }

    /// Offset of the current step. Only meaningful while InProgress; reads 0
    /// in the other phases.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The step being worked on, if the session is in progress and the
    /// process has steps.
    pub fn current_step(&self) -> Option<&ProcessStep> {
        match self.phase {
            SessionPhase::InProgress => self.process.step(self.current_index),
            SessionPhase::Idle | SessionPhase::Finished => None,
        }
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Ends the session, handing back the process with its completion flags.
    pub fn into_process(self) -> Process {
        self.process
    }

    // Transition result for a step that just became current.
    fn emit(&self) -> Transition {
        Transition {
            status_text: self.status_text.clone(),
            animation_tag: self.current_step().and_then(|step| step.animation_tag.clone()),
            phase: self.phase,
        }
    }

    // Current state with no animation trigger.
    fn snapshot(&self) -> Transition {
        Transition {
            status_text: self.status_text.clone(),
            animation_tag: None,
            phase: self.phase,
        }
    }
}
