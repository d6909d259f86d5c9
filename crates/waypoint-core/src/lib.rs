//! Core library for the Waypoint shipment timeline renderer.
//!
//! This crate turns raw shipment timeline records into
//! presentation-ready view-models: a colored indicator, a status
//! caption, a type title, and a deduplicated list of human-readable
//! description lines per step. The resolution logic is pure and total;
//! rendering layers can call it unconditionally inside a draw path.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): the [`Step`](models::Step) record
//!   with its status/type enumerations and the resolved
//!   [`StepViewModel`](models::StepViewModel) output
//! - **Resolution** ([`resolve`]): the pure step presentation resolver
//!   (styles, descriptions, sub-step aggregation, stable dedup)
//! - **Text Tables** ([`text`]): every user-facing string behind a
//!   swappable [`Lexicon`](text::Lexicon)
//! - **Timelines** ([`timeline`]): JSON document loading and bulk
//!   resolution with 1-based display indices
//! - **Display** ([`display`]): markdown formatting of resolved
//!   view-models for terminal rendering
//!
//! The only fallible operations live in [`timeline`] (reading and
//! parsing documents); resolution itself never errors. Out-of-vocabulary
//! statuses and types from upstream data map to `Unknown` variants and
//! resolve through defined fallbacks instead of failing.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{
//!     display::TimelineView,
//!     resolve::Resolver,
//!     timeline::Timeline,
//! };
//!
//! # fn example() -> waypoint_core::Result<()> {
//! let timeline = Timeline::from_json(
//!     r#"[{ "id": "s1", "type": "start", "status": "current" }]"#,
//! )?;
//!
//! let resolver = Resolver::new();
//! let view = TimelineView(timeline.resolve_all(&resolver));
//! println!("{}", view);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod resolve;
pub mod text;
pub mod timeline;

// Re-export commonly used types
pub use display::TimelineView;
pub use error::{Result, TimelineError};
pub use models::{DeliveryInfo, Location, Step, StepStatus, StepType, StepViewModel, Tone};
pub use resolve::{resolve_step_view_model, Resolver};
pub use text::Lexicon;
pub use timeline::Timeline;
