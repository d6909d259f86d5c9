//! Data models for shipment timelines.
//!
//! This module contains the domain records a timeline is made of
//! ([`Step`], [`DeliveryInfo`], [`Location`]) together with the closed
//! status/type enumerations and the resolved output type
//! ([`StepViewModel`]). Display implementations live in
//! [`crate::display`] to keep data structures separate from
//! presentation formatting.
//!
//! Input records arrive as JSON from upstream fetch collaborators and
//! are deserialized leniently: optional fields may be absent and
//! out-of-vocabulary status/type strings map to the `Unknown` variants
//! instead of failing, so a malformed record can never abort a render.

pub mod status;
pub mod step;
pub mod viewmodel;


pub use status::{StepStatus, StepType};
pub use step::{DeliveryInfo, Location, Step};
pub use viewmodel::{StepViewModel, Tone};
