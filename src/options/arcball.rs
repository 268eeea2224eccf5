use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{ArcPolicy, Handedness};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arcball", inline)]
#[serde(default)]
/// Virtual sphere placement and rotation behavior.
pub struct ArcballOptions {
    /// Sphere radius in pixels.
    #[schemars(title = "Radius", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub radius: f32,
    /// Projection convention, matching the demo's view space.
    #[schemars(title = "Handedness")]
    pub handedness: Handedness,
    /// Arcball (direct) or trackball (shortest arc).
    #[schemars(title = "Policy")]
    pub policy: ArcPolicy,
    /// Sphere center in Y-up pixels; the viewport center when unset.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f32; 2]>,
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            radius: 300.0,
            handedness: Handedness::Left,
            policy: ArcPolicy::DirectArc,
            center: None,
        }
    }
}
