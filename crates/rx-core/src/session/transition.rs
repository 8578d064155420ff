//! Result of a session transition.

use serde::{Deserialize, Serialize};

use crate::models::SessionPhase;

/// What the display layer should show after a transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transition {
    /// Text for the status label
    pub status_text: String,

    /// Animation to trigger for the step that just became current
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_tag: Option<String>,

    /// Phase after the transition
    pub phase: SessionPhase,
}

impl Transition {
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }
}
