//! Collection wrapper types for displaying resolved timelines.

use std::{fmt, ops::Index};

use crate::models::StepViewModel;

/// Newtype wrapper for displaying a fully resolved timeline.
///
/// Formats each step view-model in order and handles the empty
/// timeline gracefully.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::display::TimelineView;
/// use waypoint_core::models::{Step, StepStatus, StepType};
/// use waypoint_core::resolve::resolve_step_view_model;
///
/// let step = Step::new("s1", StepType::End, StepStatus::Created);
/// let view = TimelineView(vec![resolve_step_view_model(&step, 1)]);
/// let output = format!("{}", view);
/// assert!(output.contains("Trip complete"));
/// ```
pub struct TimelineView(pub Vec<StepViewModel>);

impl TimelineView {
    /// Check if the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of resolved steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the view-model at the given 0-based index.
    pub fn get(&self, index: usize) -> Option<&StepViewModel> {
        self.0.get(index)
    }

    /// Get an iterator over the resolved steps.
    pub fn iter(&self) -> std::slice::Iter<'_, StepViewModel> {
        self.0.iter()
    }
}

impl Index<usize> for TimelineView {
    type Output = StepViewModel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TimelineView {
    type Item = StepViewModel;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimelineView {
    type Item = &'a StepViewModel;
    type IntoIter = std::slice::Iter<'a, StepViewModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TimelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps in this timeline.")?;
            return Ok(());
        }

        writeln!(f, "# Shipment Timeline")?;
        writeln!(f)?;
        for view in &self.0 {
            write!(f, "{view}")?;
        }
        Ok(())
    }
}
