/// Decides when a scroll of the message list asks for an older page.
///
/// A qualifying event is one whose offset from the top is zero or less
/// (elastic overscroll reports negative offsets). With a non-zero throttle,
/// qualifying events closer than the window to the last advance are dropped.
#[derive(Clone, Debug, Default)]
pub struct ScrollObserver {
    throttle_ms: f64,
    last_advance: Option<f64>,
}

impl ScrollObserver {
    pub fn new(throttle_ms: u32) -> Self {
        Self {
            throttle_ms: f64::from(throttle_ms),
            last_advance: None,
        }
    }

    /// Returns `true` when the pagination cursor should advance.
    pub fn observe(&mut self, scroll_top: i32, now_ms: f64) -> bool {
        if scroll_top > 0 {
            return false;
        }
        if let Some(last) = self.last_advance {
            if self.throttle_ms > 0.0 && now_ms - last < self.throttle_ms {
                log::trace!("scroll at top throttled ({:.0} ms since last)", now_ms - last);
                return false;
            }
        }
        self.last_advance = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unthrottled_fires_on_every_event_at_top() {
        let mut observer = ScrollObserver::new(0);
        assert!(!observer.observe(120, 0.0));
        assert!(observer.observe(0, 1.0));
        assert!(observer.observe(0, 2.0));
        assert!(!observer.observe(40, 3.0));
        assert!(observer.observe(0, 4.0));
    }

    #[test]
    fn overscroll_counts_as_top() {
        let mut observer = ScrollObserver::new(0);
        assert!(observer.observe(-3, 0.0));
    }

    #[test]
    fn throttle_drops_repeats_inside_window() {
        let mut observer = ScrollObserver::new(250);
        assert!(observer.observe(0, 1_000.0));
        assert!(!observer.observe(0, 1_100.0));
        assert!(!observer.observe(80, 1_200.0));
        assert!(observer.observe(0, 1_260.0));
    }
}
