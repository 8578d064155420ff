//! Session phase and user action enumerations.

use serde::{Deserialize, Serialize};

/// Phase of a guided session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No step is active
    #[default]
    Idle,

    /// A step is current and the user is working through the procedure
    InProgress,

    /// Every step has been walked through; only a reset is possible
    Finished,
}

impl SessionPhase {
    /// Lowercase identifier used in logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::InProgress => "inprogress",
            SessionPhase::Finished => "finished",
        }
    }

    /// Get the phase with an icon for display.
    ///
    /// ```rust
    /// use rx_core::models::SessionPhase;
    ///
    /// assert_eq!(SessionPhase::Idle.with_icon(), "○ Idle");
    /// assert_eq!(SessionPhase::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(SessionPhase::Finished.with_icon(), "✓ Finished");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "○ Idle",
            SessionPhase::InProgress => "➤ In Progress",
            SessionPhase::Finished => "✓ Finished",
        }
    }

    /// Actions a display layer should offer in this phase.
    pub fn available_actions(&self) -> &'static [SessionAction] {
        match self {
            SessionPhase::Idle => &[SessionAction::Start],
            SessionPhase::InProgress => &[SessionAction::Advance, SessionAction::Reset],
            SessionPhase::Finished => &[SessionAction::Reset],
        }
    }

    /// Returns true if `action` is a valid transition from this phase.
    pub fn allows(&self, action: SessionAction) -> bool {
        self.available_actions().contains(&action)
    }
}

/// A user intent forwarded by the display layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    /// Begin the procedure at its first step
    Start,

    /// Move to the next step, or finish after the last one
    Advance,

    /// Abandon progress and return to idle
    Reset,
}

impl SessionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Start => "start",
            SessionAction::Advance => "advance",
            SessionAction::Reset => "reset",
        }
    }
}
