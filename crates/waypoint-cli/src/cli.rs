//! Command handlers bridging parsed arguments to waypoint-core.
//!
//! Each handler loads the timeline document, runs the resolver, and
//! hands the resulting markdown (or JSON, for `export`) to the
//! terminal renderer. Resolution itself cannot fail; every error path
//! here is about reading or parsing the document, or a display index
//! that is out of range.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use waypoint_core::{Resolver, Timeline, TimelineView};

use crate::renderer::TerminalRenderer;

/// CLI command dispatcher owning the renderer and resolver.
pub struct Cli {
    resolver: Resolver,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            resolver: Resolver::new(),
            renderer,
        }
    }

    fn load(&self, file: &Path) -> Result<Timeline> {
        let timeline = Timeline::load(file)
            .with_context(|| format!("Failed to load timeline from {}", file.display()))?;
        debug!("Loaded timeline with {} steps", timeline.len());
        Ok(timeline)
    }

    /// Render the whole timeline as markdown.
    pub fn show(&self, file: &Path) -> Result<()> {
        let timeline = self.load(file)?;
        let view = TimelineView(timeline.resolve_all(&self.resolver));
        self.renderer.render(&view.to_string())
    }

    /// Render a single step by its 1-based display index.
    pub fn show_step(&self, file: &Path, index: usize) -> Result<()> {
        let timeline = self.load(file)?;
        let step = timeline.step(index)?;
        let view = self.resolver.resolve(step, index as u32);
        self.renderer.render(&view.to_string())
    }

    /// Print every resolved view-model as pretty JSON.
    pub fn export(&self, file: &Path) -> Result<()> {
        let timeline = self.load(file)?;
        let views = timeline.resolve_all(&self.resolver);
        let json = serde_json::to_string_pretty(&views)
            .context("Failed to serialize view-models")?;
        println!("{json}");
        Ok(())
    }
}
