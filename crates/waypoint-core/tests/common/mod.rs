use waypoint_core::models::{DeliveryInfo, Location, Step, StepStatus, StepType};

/// Build a step carrying a pickup location description.
pub fn step_with_pickup(id: &str, status: StepStatus, description: &str) -> Step {
    let mut step = Step::new(id, StepType::GoingToPickup, status);
    step.delivery = Some(DeliveryInfo {
        pickup_location: Some(Location {
            description: Some(description.to_string()),
        }),
        dropoff_location: None,
        cargo_types: None,
    });
    step
}

/// Build a loading/unloading step carrying a cargo summary.
pub fn step_with_cargo(id: &str, kind: StepType, status: StepStatus, cargo: &str) -> Step {
    let mut step = Step::new(id, kind, status);
    step.delivery = Some(DeliveryInfo {
        pickup_location: None,
        dropoff_location: None,
        cargo_types: Some(cargo.to_string()),
    });
    step
}
