use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Rates for the time-driven object and camera animations.
pub struct AnimationOptions {
    /// Object tumble rate in degrees per millisecond.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub spin_speed: f32,
    /// Camera truck rate in radians per millisecond.
    #[schemars(title = "Truck Speed", range(min = 0.0, max = 0.01), extend("step" = 0.0005))]
    pub truck_speed: f32,
    /// Camera truck half-width in world units.
    #[schemars(title = "Truck Amplitude", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub truck_amplitude: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            spin_speed: 0.05,
            truck_speed: 0.001,
            truck_amplitude: 2.0,
        }
    }
}
