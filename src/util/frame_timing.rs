//! Frame-to-frame elapsed time measurement.

use web_time::Instant;

/// Frame timer reporting the time between successive queries, with a
/// smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Reference point of the next elapsed query; `None` until `run`.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Start (or restart) measuring from now.
    pub fn run(&mut self) {
        self.last_frame = Some(Instant::now());
    }

    /// Whether `run` has been called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_frame.is_some()
    }

    /// Milliseconds since the previous query or since `run`, and make now
    /// the new reference point. Returns `0.0` on a stopped timer.
    pub fn milliseconds_elapsed(&mut self) -> f32 {
        let Some(last) = self.last_frame else {
            log::warn!("frame timer queried before run()");
            return 0.0;
        };
        let now = Instant::now();
        let elapsed = now.duration_since(last);
        self.last_frame = Some(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        // microsecond resolution
        elapsed.as_micros() as f32 * 0.001
    }

    /// Seconds since the previous query; see
    /// [`milliseconds_elapsed`](Self::milliseconds_elapsed).
    pub fn seconds_elapsed(&mut self) -> f32 {
        self.milliseconds_elapsed() * 0.001
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
