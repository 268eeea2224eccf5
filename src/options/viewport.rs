use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial drawable size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
pub struct ViewportOptions {
    /// Width in physical pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Height in physical pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl ViewportOptions {
    /// Center of the viewport in pixels.
    #[must_use]
    pub fn center(&self) -> [f32; 2] {
        [self.width as f32 / 2.0, self.height as f32 / 2.0]
    }
}
