//! Status and type enumerations for shipment timeline steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
///
/// Upstream data sources deliver statuses as strings; any value outside
/// the known vocabulary deserializes to [`StepStatus::Unknown`] rather
/// than failing, and resolvers treat it as [`StepStatus::Created`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has been scheduled but not started
    #[default]
    Created,

    /// Step is the one currently in progress
    Current,

    /// Step has been completed
    Complete,

    /// Out-of-vocabulary status from upstream data
    #[serde(other)]
    Unknown,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(StepStatus::Created),
            "current" => Ok(StepStatus::Current),
            "complete" => Ok(StepStatus::Complete),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Created => "created",
            StepStatus::Current => "current",
            StepStatus::Complete => "complete",
            StepStatus::Unknown => "unknown",
        }
    }

    /// Whether this step is the active row of the timeline.
    ///
    /// Renderers dim every row except the current one; the resolved
    /// view-model carries this as its `dimmed` flag so the rendering
    /// layer never branches on status itself.
    pub fn is_active(&self) -> bool {
        matches!(self, StepStatus::Current)
    }
}

/// Type-safe enumeration of step types.
///
/// The type drives both the row's title label and the description
/// branch taken by the resolver. Unrecognized wire values deserialize
/// to [`StepType::Unknown`], which resolves to empty text that is
/// filtered out downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Trip departure
    Start,

    /// Driving to the pickup location
    GoingToPickup,

    /// Loading cargo at the pickup location
    Loading,

    /// Driving to the dropoff location
    GoingToDropoff,

    /// Unloading cargo at the dropoff location
    Unloading,

    /// Trip completion
    End,

    /// Out-of-vocabulary type from upstream data
    #[serde(other)]
    Unknown,
}

impl FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(StepType::Start),
            "going_to_pickup" => Ok(StepType::GoingToPickup),
            "loading" => Ok(StepType::Loading),
            "going_to_dropoff" => Ok(StepType::GoingToDropoff),
            "unloading" => Ok(StepType::Unloading),
            "end" => Ok(StepType::End),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

impl StepType {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Start => "start",
            StepType::GoingToPickup => "going_to_pickup",
            StepType::Loading => "loading",
            StepType::GoingToDropoff => "going_to_dropoff",
            StepType::Unloading => "unloading",
            StepType::End => "end",
            StepType::Unknown => "unknown",
        }
    }
}
