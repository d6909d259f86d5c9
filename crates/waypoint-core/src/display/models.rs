//! Display implementations for domain models.
//!
//! Display impls are kept out of the model modules so data structures
//! stay free of presentation concerns. Everything here formats as
//! markdown for rich terminal rendering downstream.

use std::fmt;

use crate::models::{StepStatus, StepType, StepViewModel, Tone};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Tone {
    /// Terminal glyph standing in for the colored circle indicator.
    ///
    /// `➤` for the accented in-progress row, `✓` for success green,
    /// `○` for muted rows.
    pub fn glyph(&self) -> &'static str {
        match self {
            Tone::Accent => "➤",
            Tone::Success => "✓",
            Tone::Muted => "○",
        }
    }
}

impl fmt::Display for StepViewModel {
    /// Format the resolved step as one markdown block.
    ///
    /// Header with the zero-padded index, type title, and status
    /// caption behind the indicator glyph, then one bullet per
    /// description line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_label.is_empty() {
            writeln!(
                f,
                "### {}. ({} {})",
                self.formatted_index,
                self.indicator_color.glyph(),
                self.status_label
            )?;
        } else {
            writeln!(
                f,
                "### {}. {} ({} {})",
                self.formatted_index,
                self.type_label,
                self.indicator_color.glyph(),
                self.status_label
            )?;
        }
        writeln!(f)?;

        for description in &self.descriptions {
            writeln!(f, "- {description}")?;
        }
        if !self.descriptions.is_empty() {
            writeln!(f)?;
        }

        Ok(())
    }
}
