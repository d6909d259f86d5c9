//! The step presentation resolver.
//!
//! This module is the core of the crate: the pure, side-effect-free
//! logic that turns a [`Step`](crate::models::Step) record and a
//! 1-based display index into a
//! [`StepViewModel`](crate::models::StepViewModel).
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌─────────────────┐
//! │ Step record  │    │     Resolver      │    │  StepViewModel  │
//! │ (status/type │───▶│ style + describe  │───▶│ colors, labels, │
//! │  /delivery)  │    │ + dedup + number  │    │  descriptions   │
//! └──────────────┘    └───────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`style`]: status → indicator/label colors and caption
//! - [`describe`]: type/status/delivery → description lines, sub-step
//!   aggregation, and stable deduplication
//! - [`builder`]: composition into the final view-model plus the step
//!   number badge formatting
//!
//! ## Contract
//!
//! Every function here is total: unknown statuses style like upcoming
//! steps, unknown types resolve to empty (filtered) text, and absent
//! delivery fields resolve through sentinels. Resolution never fails,
//! never blocks, and never touches shared state; a render path can call
//! it unconditionally.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{DeliveryInfo, Location, Step, StepStatus, StepType};
//! use waypoint_core::resolve::resolve_step_view_model;
//!
//! let mut step = Step::new("s-3", StepType::GoingToPickup, StepStatus::Current);
//! step.delivery = Some(DeliveryInfo {
//!     pickup_location: Some(Location {
//!         description: Some("Warehouse 1".to_string()),
//!     }),
//!     ..Default::default()
//! });
//!
//! let vm = resolve_step_view_model(&step, 3);
//! assert_eq!(vm.formatted_index, "03");
//! assert_eq!(vm.type_label, "Arriving at pickup");
//! assert_eq!(vm.descriptions, vec!["Warehouse 1".to_string()]);
//! ```

pub mod builder;
pub mod describe;
pub mod style;

#[cfg(test)]
mod tests;

pub use builder::{format_step_number, resolve_step_view_model, Resolver};
pub use describe::{additional_descriptions, dedup_stable, describe};
pub use style::{status_style, StatusStyle};
