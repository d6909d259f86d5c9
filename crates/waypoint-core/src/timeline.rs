//! Timeline documents: loading and bulk resolution.
//!
//! A timeline is the JSON document upstream fetch collaborators hand
//! over: an ordered list of [`Step`] records. This module owns the two
//! fallible operations of the crate (reading the file, parsing the
//! JSON) and the convenience of resolving every step with its 1-based
//! display index assigned in order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::models::{Step, StepViewModel};
use crate::resolve::Resolver;

/// An ordered shipment timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    /// Steps in display order
    pub steps: Vec<Step>,
}

impl Timeline {
    /// Parse a timeline from a JSON document.
    ///
    /// Accepts either the object form `{"steps": [...]}` or a bare
    /// step array, which is how some fetch endpoints deliver it.
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            Wrapped { steps: Vec<Step> },
            Bare(Vec<Step>),
        }

        let timeline = match serde_json::from_str::<Document>(json)? {
            Document::Wrapped { steps } => Self { steps },
            Document::Bare(steps) => Self { steps },
        };
        Ok(timeline)
    }

    /// Load a timeline from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json =
            fs::read_to_string(path).map_err(|e| TimelineError::file_system(path, e))?;
        Self::from_json(&json)
    }

    /// Number of steps in the timeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a step by its 1-based display index.
    pub fn step(&self, index: usize) -> Result<&Step> {
        index
            .checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .ok_or(TimelineError::StepNotFound {
                index,
                len: self.steps.len(),
            })
    }

    /// Resolve every step, assigning 1-based display indices in order.
    pub fn resolve_all(&self, resolver: &Resolver) -> Vec<StepViewModel> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| resolver.resolve(step, i as u32 + 1))
            .collect()
    }
}
