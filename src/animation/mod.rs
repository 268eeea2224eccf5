//! Per-object animation state advanced with explicit frame time.

mod oscillator;
mod spin;

pub use oscillator::Oscillator;
pub use spin::Spin;
