//! Description resolution and aggregation.
//!
//! One description line is produced per step (and per folded sub-step)
//! by [`describe`], collected by [`additional_descriptions`], and made
//! stable-unique by [`dedup_stable`]. All three are pure functions;
//! none of them can fail, because every absent field resolves through a
//! sentinel instead of an error.

use crate::models::{DeliveryInfo, Location, Step, StepStatus, StepType};
use crate::text::Lexicon;

/// Resolve the description line for one step.
///
/// `status` is always the CONTAINING step's status, even when `kind`
/// and `delivery` come from a folded sub-step: the `start` branch keys
/// its wording off how far along the parent row is, not the sub-step.
/// Callers aggregating sub-steps must pass the parent's status down
/// explicitly.
///
/// An unrecognized type yields the empty string, which the merge stage
/// filters out.
pub fn describe(
    kind: StepType,
    status: StepStatus,
    delivery: Option<&DeliveryInfo>,
    lexicon: &Lexicon,
) -> String {
    match kind {
        StepType::Start => {
            if status == StepStatus::Complete {
                lexicon.trip_started.to_string()
            } else {
                lexicon.prepare_to_start.to_string()
            }
        }
        StepType::GoingToPickup => {
            location_text(delivery.and_then(|d| d.pickup_location.as_ref()), lexicon)
        }
        StepType::GoingToDropoff => {
            location_text(delivery.and_then(|d| d.dropoff_location.as_ref()), lexicon)
        }
        StepType::Loading | StepType::Unloading => {
            let cargo = delivery
                .and_then(|d| d.cargo_types.as_deref())
                .unwrap_or(lexicon.cargo_missing);
            format!("{}{}", lexicon.cargo_prefix, cargo)
        }
        StepType::End => lexicon.trip_ended.to_string(),
        StepType::Unknown => String::new(),
    }
}

/// A location with no description, or an empty one, reads as the
/// "no data" sentinel.
fn location_text(location: Option<&Location>, lexicon: &Lexicon) -> String {
    match location.and_then(|l| l.description.as_deref()) {
        Some(desc) if !desc.is_empty() => desc.to_string(),
        _ => lexicon.no_data.to_string(),
    }
}

/// Resolve one description per folded sub-step of `step`, in order.
///
/// Each sub-step supplies its own type and delivery payload, but the
/// `start` branch still sees the PRIMARY step's status. Only the direct
/// `additional_steps` are visited; deeper nesting is representable in
/// the model but never descended into. Sub-steps that resolve to empty
/// text are skipped.
pub fn additional_descriptions(step: &Step, lexicon: &Lexicon) -> Vec<String> {
    step.additional_steps
        .iter()
        .map(|sub| describe(sub.kind, step.status, sub.delivery.as_ref(), lexicon))
        .filter(|desc| !desc.is_empty())
        .collect()
}

/// Stable-unique merge: keep the first occurrence of each exact string,
/// drop later duplicates, preserve relative order. Empty strings are
/// dropped outright.
///
/// Equality is exact; no trimming or normalization is applied.
pub fn dedup_stable(descriptions: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(descriptions.len());
    for desc in descriptions {
        if !desc.is_empty() && !unique.contains(&desc) {
            unique.push(desc);
        }
    }
    unique
}
