//! Process step model definition.

use serde::{Deserialize, Serialize};

/// A single instruction unit within a [`Process`](super::Process).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessStep {
    /// Positive identifier, unique within its process
    pub id: u32,

    /// Short label shown when the step becomes current
    pub title: String,

    /// Instructional text
    pub description: String,

    /// Whether the step has been carried out
    #[serde(default)]
    pub completed: bool,

    /// Presentation effect the display layer triggers when this step becomes
    /// current. Opaque to the core.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_tag"
    )]
    pub animation_tag: Option<String>,
}

impl ProcessStep {
    /// Creates an incomplete step without an animation tag.
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            animation_tag: None,
        }
    }

    /// Attaches an animation tag. An empty tag leaves the step untagged.
    pub fn with_animation(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.animation_tag = if tag.is_empty() { None } else { Some(tag) };
        self
    }
}

// "" and a missing tag both mean "no animation".
fn deserialize_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.filter(|t| !t.is_empty()))
}
