//! Terminal rendering module for rich markdown output
//!
//! Renders the markdown produced by waypoint-core's display layer using
//! termimad, with a plain text fallback for `--no-color`.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Accent orange of the timeline palette, as a terminal color.
const ACCENT: Color = Color::Rgb {
    r: 0xFE,
    g: 0x6F,
    b: 0x12,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Step headers carry the accent; bullets stay muted like the
        // dimmed timeline rows.
        skin.set_headers_fg(ACCENT);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Grey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers get a full-line accent; everything else goes
            // through the skin inline.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    print!("\x1b[38;2;254;111;18m{line}\x1b[0m");
                    println!();
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{}", markdown);
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
