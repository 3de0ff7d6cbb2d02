/// Fixed-timestep gate for the game loop. Wall-clock time is fed in every
/// loop iteration; a tick fires once the accumulated time reaches the
/// configured interval. The interval is subtracted when a tick fires (the
/// remainder carries over), so ticks keep a steady cadence instead of the
/// gate staying open forever once crossed. At most one tick fires per
/// `advance` call.
pub struct TickTimer {
    interval: f32,
    accumulator: f32,
    since_tick: f32,
}

impl TickTimer {
    pub fn new(interval: f32) -> TickTimer {
        TickTimer {
            interval,
            accumulator: 0.0,
            since_tick: 0.0,
        }
    }

    /// Feeds `delta` seconds of elapsed wall-clock time. Returns the number
    /// of seconds since the previously fired tick when a tick is due.
    pub fn advance(&mut self, delta: f32) -> Option<f32> {
        self.accumulator += delta;
        self.since_tick += delta;

        if self.accumulator < self.interval {
            return None;
        }
        self.accumulator -= self.interval;

        let since = self.since_tick;
        self.since_tick = 0.0;
        Some(since)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tick_before_the_interval_elapses() {
        let mut timer = TickTimer::new(0.25);
        assert_eq!(timer.advance(0.1), None);
        assert_eq!(timer.advance(0.1), None);
    }

    #[test]
    fn tick_fires_once_the_interval_is_reached() {
        let mut timer = TickTimer::new(0.25);
        assert_eq!(timer.advance(0.1), None);
        let since = timer.advance(0.2).expect("tick should fire");
        assert!((since - 0.3).abs() < 1e-6);
    }

    #[test]
    fn delta_spans_the_whole_gap_between_ticks() {
        let mut timer = TickTimer::new(0.25);
        assert!(timer.advance(0.3).is_some());
        // three quiet iterations, then a tick covering all four
        assert_eq!(timer.advance(0.1), None);
        assert_eq!(timer.advance(0.05), None);
        assert_eq!(timer.advance(0.02), None);
        let since = timer.advance(0.1).expect("tick should fire");
        assert!((since - 0.27).abs() < 1e-6);
    }

    #[test]
    fn remainder_carries_over_to_the_next_tick() {
        let mut timer = TickTimer::new(0.25);
        assert!(timer.advance(0.4).is_some());
        // 0.15 left in the accumulator, so 0.1 more is enough
        assert!(timer.advance(0.1).is_some());
    }

    #[test]
    fn at_most_one_tick_per_advance() {
        let mut timer = TickTimer::new(0.25);
        assert!(timer.advance(1.0).is_some());
        // the backlog drains one tick per call
        assert!(timer.advance(0.0).is_some());
        assert!(timer.advance(0.0).is_some());
        assert!(timer.advance(0.0).is_some());
        assert_eq!(timer.advance(0.0), None);
    }
}
