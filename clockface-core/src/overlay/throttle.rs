use std::time::{Duration, Instant};

use crate::foundation::core::Fps;

/// Fixed-rate loop pacing.
///
/// Each [`FrameThrottle::tick`] sleeps until at least one frame period has passed since the
/// previous tick. The first tick never sleeps.
#[derive(Debug)]
pub struct FrameThrottle {
    period: Option<Duration>,
    last: Option<Instant>,
}

impl FrameThrottle {
    /// Pace to `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            period: Some(fps.frame_duration()),
            last: None,
        }
    }

    /// A throttle whose ticks return immediately.
    pub fn disabled() -> Self {
        Self {
            period: None,
            last: None,
        }
    }

    /// Frame period, or `None` when disabled.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Block until the next frame is due.
    pub fn tick(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < period {
                std::thread::sleep(period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/throttle.rs"]
mod tests;
