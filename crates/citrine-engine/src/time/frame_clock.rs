use std::time::{Duration, Instant};

/// Timing snapshot handed to the application once per frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starts at 0.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots for one presentation loop.
///
/// Delta time is clamped on both ends: the lower bound keeps tight redraw
/// loops from reporting a zero dt, the upper bound keeps the first frame
/// after a long stall (debugger, minimized window) from reporting seconds
/// of elapsed time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Rebases the clock so the next tick does not see the gap.
    ///
    /// Call after suspensions or surface reconfigures.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the snapshot for this frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_never_zero() {
        let mut clock = FrameClock::new();
        // Two back-to-back ticks are faster than the lower clamp.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt > 0.0);
        assert!(ft.dt >= Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn dt_is_bounded_above() {
        let mut clock = FrameClock::new();
        let ft = clock.tick();
        assert!(ft.dt <= Duration::from_millis(250).as_secs_f32());
    }

    #[test]
    fn reset_rebases_the_clock() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        let ft = clock.tick();
        assert!(ft.dt <= Duration::from_millis(250).as_secs_f32());
        assert_eq!(ft.frame_index, 1);
    }
}
