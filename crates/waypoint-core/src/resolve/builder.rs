//! View-model assembly.

use crate::models::{Step, StepViewModel};
use crate::text::Lexicon;

use super::describe::{additional_descriptions, dedup_stable, describe};
use super::style::status_style;

/// Format a 1-based display index for the step number badge.
///
/// Indices under 10 are zero-padded to two characters; everything else
/// is the plain decimal string.
pub fn format_step_number(index: u32) -> String {
    if index < 10 {
        format!("0{index}")
    } else {
        index.to_string()
    }
}

/// Resolves [`Step`] records into presentation-ready view-models.
///
/// The resolver owns only a [`Lexicon`]; resolution itself is a pure
/// function of the step and index arguments. It performs no I/O, never
/// fails, and produces value-equal output for equal input, so callers
/// may memoize keyed on `(step, index)` if they wish.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    lexicon: Lexicon,
}

impl Resolver {
    /// Create a resolver with the default (English) text tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom text table.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Resolve one timeline step into its view-model.
    ///
    /// `display_index` is the step's 1-based position in the timeline.
    /// The step's own description comes first, followed by one line per
    /// folded sub-step, and the merged list is deduplicated with
    /// first-occurrence order preserved.
    pub fn resolve(&self, step: &Step, display_index: u32) -> StepViewModel {
        let style = status_style(step.status, &self.lexicon);

        let mut descriptions = Vec::with_capacity(1 + step.additional_steps.len());
        descriptions.push(describe(
            step.kind,
            step.status,
            step.delivery.as_ref(),
            &self.lexicon,
        ));
        descriptions.extend(additional_descriptions(step, &self.lexicon));

        StepViewModel {
            indicator_color: style.indicator,
            status_label: style.label.to_string(),
            status_label_color: style.label_tone,
            type_label: self.lexicon.type_label(step.kind).to_string(),
            descriptions: dedup_stable(descriptions),
            formatted_index: format_step_number(display_index),
            dimmed: !step.status.is_active(),
        }
    }
}

/// Resolve a step with the default text tables.
///
/// Convenience for callers that never swap the wording; equivalent to
/// `Resolver::new().resolve(step, display_index)`.
pub fn resolve_step_view_model(step: &Step, display_index: u32) -> StepViewModel {
    Resolver::new().resolve(step, display_index)
}
