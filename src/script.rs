//! Recorded pointer gestures that can be replayed through an
//! [`InputProcessor`].
//!
//! Scripts are TOML files with one `[[events]]` table per event:
//!
//! ```toml
//! [[events]]
//! kind = "cursor_moved"
//! x = 320.0
//! y = 240.0
//!
//! [[events]]
//! kind = "mouse_button"
//! button = "left"
//! pressed = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::input::{InputEvent, InputProcessor};

/// An ordered list of input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureScript {
    /// Events in delivery order.
    pub events: Vec<InputEvent>,
}

impl GestureScript {
    /// Parse a script from TOML text.
    pub fn parse(text: &str) -> Result<Self, DemoError> {
        toml::from_str(text).map_err(|e| DemoError::ScriptParse(e.to_string()))
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Feed every event to `input` in order. Returns how many events
    /// changed the orientation or spin.
    pub fn replay(&self, input: &mut InputProcessor) -> usize {
        let mut changed = 0;
        for (i, event) in self.events.iter().enumerate() {
            if input.handle_event(*event) {
                changed += 1;
            }
            log::debug!(
                "event {i} {event:?}: orientation {:?}",
                input.arcball().orientation()
            );
        }
        changed
    }
}
