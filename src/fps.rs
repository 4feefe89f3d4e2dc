//! Frame rate measurement.

use std::time::{Duration, Instant};

/// Counts frames and reports the rate once per interval.
#[derive(Clone, Debug)]
pub struct Counter {
    frames: u32,
    since: Instant,
    interval: Duration,
}

impl Counter {
    /// A counter reporting once per second, starting at `now`.
    pub fn new(now: Instant) -> Self {
        Self::with_interval(now, Duration::from_secs(1))
    }

    /// A counter reporting once per `interval`.
    pub fn with_interval(now: Instant, interval: Duration) -> Self {
        Self {
            frames: 0,
            since: now,
            interval,
        }
    }

    /// Records one frame finished at `now`.
    ///
    /// Returns frames per second over the elapsed interval once at least
    /// one interval has passed since the last report, then starts over.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.since);
        if elapsed < self.interval || elapsed == Duration::from_secs(0) {
            return None;
        }
        let rate = self.frames as f64 / elapsed.as_secs_f64();
        self.frames = 0;
        self.since = now;
        Some(rate)
    }
}

/// Formats a window title with the frame rate appended.
pub fn title(base: &str, rate: f64) -> String {
    format!("{} [{:.1} FPS]", base, rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_interval_elapses() {
        let start = Instant::now();
        let mut counter = Counter::new(start);
        for i in 1..60 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 16)), None);
        }
    }

    #[test]
    fn reports_rate_and_resets() {
        let start = Instant::now();
        let mut counter = Counter::new(start);
        for i in 1..60 {
            counter.tick(start + Duration::from_millis(i * 10));
        }
        let rate = counter.tick(start + Duration::from_secs(1)).unwrap();
        assert!((rate - 60.0).abs() < 1e-9, "rate was {}", rate);

        let next = start + Duration::from_millis(1500);
        assert_eq!(counter.tick(next), None);
        let rate = counter.tick(start + Duration::from_secs(3)).unwrap();
        assert!((rate - 1.0).abs() < 1e-9, "rate was {}", rate);
    }

    #[test]
    fn custom_interval() {
        let start = Instant::now();
        let mut counter = Counter::with_interval(start, Duration::from_millis(500));
        assert_eq!(counter.tick(start + Duration::from_millis(250)), None);
        let rate = counter.tick(start + Duration::from_millis(500)).unwrap();
        assert!((rate - 4.0).abs() < 1e-9, "rate was {}", rate);
    }

    #[test]
    fn title_has_one_decimal() {
        assert_eq!(title("OpenGL Example", 59.94), "OpenGL Example [59.9 FPS]");
    }
}
