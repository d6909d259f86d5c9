//! Display formatting for resolved timelines.
//!
//! The rendering layer consumes view-models through [`std::fmt::Display`]
//! rather than reaching into their fields:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ StepViewModel / │    │  Display impls  │    │    Markdown     │
//! │  TimelineView   │───▶│  (this module)  │───▶│    (terminal)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for the view-model and the
//!   status/type enumerations
//! - [`collections`]: the [`TimelineView`] newtype wrapper for whole
//!   timelines, with empty-collection handling
//!
//! All formatters produce markdown so the terminal renderer can apply
//! styling uniformly.

pub mod collections;
pub mod models;

pub use collections::TimelineView;
