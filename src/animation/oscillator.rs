/// Sinusoidal offset driven by elapsed frame time, used to truck a camera
/// or light back and forth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    phase: f32,
    /// Radians of phase per millisecond.
    speed: f32,
    amplitude: f32,
}

impl Oscillator {
    /// Start at phase zero.
    #[must_use]
    pub fn new(speed: f32, amplitude: f32) -> Self {
        Self {
            phase: 0.0,
            speed,
            amplitude,
        }
    }

    /// Advance the phase by `elapsed_ms` milliseconds.
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.phase = (self.phase + elapsed_ms * self.speed)
            .rem_euclid(std::f32::consts::TAU);
    }

    /// `sin(phase) * amplitude`.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.phase.sin() * self.amplitude
    }

    /// Current phase in radians, in `[0, 2π)`.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn starts_centered() {
        let osc = Oscillator::new(0.001, 2.0);
        assert_eq!(osc.offset(), 0.0);
    }

    #[test]
    fn peaks_at_quarter_period() {
        let mut osc = Oscillator::new(0.001, 2.0);
        osc.advance(FRAC_PI_2 * 1000.0);
        assert!((osc.offset() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn phase_wraps() {
        let mut osc = Oscillator::new(1.0, 1.0);
        osc.advance(10.0);
        assert!(osc.phase() < std::f32::consts::TAU);
        assert!((osc.offset() - 10.0_f32.sin()).abs() < 1e-4);
    }
}
