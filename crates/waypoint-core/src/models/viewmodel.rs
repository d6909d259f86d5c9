//! Resolved view-model types consumed by rendering layers.

use serde::{Serialize, Serializer};

/// The fixed palette used by step indicators and labels.
///
/// Tones serialize as their CSS color value so exported view-models can
/// be fed straight to a styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Highlight color for the in-progress row (`#FE6F12`)
    Accent,
    /// Completion color (`green`)
    Success,
    /// De-emphasized color for everything else (`#AAAAAA`)
    Muted,
}

impl Tone {
    /// The CSS color value for this tone.
    pub fn as_css(&self) -> &'static str {
        match self {
            Tone::Accent => "#FE6F12",
            Tone::Success => "green",
            Tone::Muted => "#AAAAAA",
        }
    }
}

impl Serialize for Tone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_css())
    }
}

/// The fully resolved, presentation-ready form of one timeline step.
///
/// Produced by [`crate::resolve::Resolver`]; contains no further
/// branching logic for the rendering layer to perform. Recomputed from
/// scratch on every resolution call and owned by the caller once
/// returned. Equal inputs always produce value-equal view-models, so
/// callers are free to memoize.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepViewModel {
    /// Color of the row's circular indicator and connector line
    pub indicator_color: Tone,

    /// Status caption, e.g. "In progress"
    pub status_label: String,

    /// Color of the status caption text
    pub status_label_color: Tone,

    /// Title for the step's type, e.g. "Arriving at pickup"
    pub type_label: String,

    /// Ordered, deduplicated description lines for the row
    pub descriptions: Vec<String>,

    /// Two-character zero-padded display index, e.g. "03"
    pub formatted_index: String,

    /// Whether the row should be rendered de-emphasized
    pub dimmed: bool,
}
