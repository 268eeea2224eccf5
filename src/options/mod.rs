//! Centralized demo options with TOML preset support.
//!
//! Arcball placement, animation rates and the initial viewport are
//! consolidated here. Options serialize to/from TOML so a demo can ship
//! presets next to its shaders.

mod animation;
mod arcball;
mod viewport;

use std::path::Path;

pub use animation::AnimationOptions;
pub use arcball::ArcballOptions;
use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::animation::{Oscillator, Spin};
use crate::camera::Arcball;
use crate::error::DemoError;
use crate::input::InputProcessor;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[arcball]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Virtual sphere parameters.
    pub arcball: ArcballOptions,
    /// Animation rates.
    pub animation: AnimationOptions,
    /// Initial drawable size.
    pub viewport: ViewportOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path).map_err(DemoError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DemoError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DemoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DemoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DemoError::Io)?;
        }
        std::fs::write(path, content).map_err(DemoError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Construct the arcball described by `[arcball]`, centered on the
    /// viewport unless a center is given.
    #[must_use]
    pub fn build_arcball(&self) -> Arcball {
        let center = self
            .arcball
            .center
            .unwrap_or_else(|| self.viewport.center());
        Arcball::new(
            Vec2::from(center),
            self.arcball.radius,
            self.arcball.handedness,
            self.arcball.policy,
        )
    }

    /// Construct an input processor driving [`build_arcball`](Self::build_arcball).
    #[must_use]
    pub fn build_input(&self) -> InputProcessor {
        InputProcessor::new(self.build_arcball(), self.viewport.height as f32)
    }

    /// Object tumble accumulator at `[animation] spin_speed`.
    #[must_use]
    pub fn build_spin(&self) -> Spin {
        Spin::new(self.animation.spin_speed)
    }

    /// Camera truck oscillator from `[animation]`.
    #[must_use]
    pub fn build_truck(&self) -> Oscillator {
        Oscillator::new(
            self.animation.truck_speed,
            self.animation.truck_amplitude,
        )
    }
}
