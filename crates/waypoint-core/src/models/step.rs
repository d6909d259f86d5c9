//! Step model definition and related delivery records.

use serde::{Deserialize, Serialize};

use super::{StepStatus, StepType};

/// A named point along a delivery route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Human-readable description of the location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Delivery context attached to a step.
///
/// Every field is optional; upstream records routinely omit parts of
/// the payload and the resolver substitutes sentinels rather than
/// treating absence as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryInfo {
    /// Where cargo is picked up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<Location>,

    /// Where cargo is dropped off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_location: Option<Location>,

    /// Free-form summary of the cargo being carried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_types: Option<String>,
}

/// Represents one node in a shipment timeline.
///
/// A step may fold further sub-events into its own visual row via
/// `additional_steps`. Sub-steps contribute their own descriptions but
/// borrow the containing step's status for certain text choices; see
/// [`crate::resolve`] for the exact contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Unique identifier for the step
    pub id: String,

    /// Kind of event this step represents (wire field `type`)
    #[serde(rename = "type")]
    pub kind: StepType,

    /// Current status of the step
    #[serde(default)]
    pub status: StepStatus,

    /// Delivery payload, when the step carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInfo>,

    /// Sub-events folded into this step's row, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_steps: Vec<Step>,
}

impl Step {
    /// Create a bare step with no delivery payload or sub-steps.
    pub fn new(id: impl Into<String>, kind: StepType, status: StepStatus) -> Self {
        Self {
            id: id.into(),
            kind,
            status,
            delivery: None,
            additional_steps: Vec::new(),
        }
    }
}
