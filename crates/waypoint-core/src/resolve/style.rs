//! Status-to-style resolution.

use crate::models::{StepStatus, Tone};
use crate::text::Lexicon;

/// The visual treatment a status maps to: indicator color, caption, and
/// caption color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub indicator: Tone,
    pub label: &'static str,
    pub label_tone: Tone,
}

/// Resolve the style row for a step status.
///
/// Total over every [`StepStatus`] variant. An unknown status falls
/// back to the `Created` row, so an out-of-vocabulary value from
/// upstream still produces a usable (muted) style instead of an empty
/// one.
pub fn status_style(status: StepStatus, lexicon: &Lexicon) -> StatusStyle {
    let label = lexicon.status_label(status);
    match status {
        StepStatus::Current => StatusStyle {
            indicator: Tone::Accent,
            label,
            label_tone: Tone::Accent,
        },
        StepStatus::Complete => StatusStyle {
            indicator: Tone::Success,
            label,
            label_tone: Tone::Muted,
        },
        StepStatus::Created | StepStatus::Unknown => StatusStyle {
            indicator: Tone::Muted,
            label,
            label_tone: Tone::Muted,
        },
    }
}
