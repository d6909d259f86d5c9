//! User-facing text tables.
//!
//! Every string that can appear in a resolved view-model lives here, so
//! swapping the wording (or, eventually, the language) means supplying
//! a different [`Lexicon`] rather than touching resolver logic. The
//! resolver functions in [`crate::resolve`] all take a `&Lexicon`.

use crate::models::{StepStatus, StepType};

/// Sentinel shown when a location has no usable description.
pub const NO_DATA: &str = "no data";

/// Placeholder token embedded after the cargo prefix when
/// `cargo_types` is absent.
///
/// The observed behavior formats the cargo line unconditionally, even
/// with nothing to put after the prefix; that quirk is pinned here as a
/// named token rather than being folded into the [`NO_DATA`] sentinel.
pub const CARGO_MISSING: &str = "unknown";

/// The complete table of user-facing strings.
///
/// [`Lexicon::default`] is the fixed English wording. All fields are
/// `'static` string slices so a lexicon is trivially copyable and
/// const-constructible.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Status caption for the in-progress row
    pub status_current: &'static str,
    /// Status caption for completed rows
    pub status_complete: &'static str,
    /// Status caption for upcoming rows
    pub status_created: &'static str,

    /// Type titles, one per known step type
    pub type_start: &'static str,
    pub type_going_to_pickup: &'static str,
    pub type_loading: &'static str,
    pub type_going_to_dropoff: &'static str,
    pub type_unloading: &'static str,
    pub type_end: &'static str,

    /// Description for a `start` step once the trip has begun
    pub trip_started: &'static str,
    /// Description for a `start` step before the trip has begun
    pub prepare_to_start: &'static str,
    /// Description for an `end` step
    pub trip_ended: &'static str,
    /// Prefix for the cargo summary line
    pub cargo_prefix: &'static str,
    /// Token used when `cargo_types` is absent
    pub cargo_missing: &'static str,
    /// Sentinel for missing location descriptions
    pub no_data: &'static str,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            status_current: "In progress",
            status_complete: "Completed",
            status_created: "Upcoming",
            type_start: "Trip start",
            type_going_to_pickup: "Arriving at pickup",
            type_loading: "Loading cargo",
            type_going_to_dropoff: "Arriving at dropoff",
            type_unloading: "Unloading cargo",
            type_end: "Trip complete",
            trip_started: "Trip started",
            prepare_to_start: "Order received, get ready to start the trip",
            trip_ended: "Trip ended",
            cargo_prefix: "Cargo: ",
            cargo_missing: CARGO_MISSING,
            no_data: NO_DATA,
        }
    }
}

impl Lexicon {
    /// Status caption for a step status.
    ///
    /// Total over all variants; an unknown status reads as upcoming.
    pub fn status_label(&self, status: StepStatus) -> &'static str {
        match status {
            StepStatus::Current => self.status_current,
            StepStatus::Complete => self.status_complete,
            StepStatus::Created | StepStatus::Unknown => self.status_created,
        }
    }

    /// Title for a step type.
    ///
    /// An unknown type yields the empty string, a safe default that
    /// renders as no title rather than an undefined value.
    pub fn type_label(&self, kind: StepType) -> &'static str {
        match kind {
            StepType::Start => self.type_start,
            StepType::GoingToPickup => self.type_going_to_pickup,
            StepType::Loading => self.type_loading,
            StepType::GoingToDropoff => self.type_going_to_dropoff,
            StepType::Unloading => self.type_unloading,
            StepType::End => self.type_end,
            StepType::Unknown => "",
        }
    }
}
