use std::time::{Duration, Instant};

/// Trailing-edge debounce: every event pushes the deadline back, and only the
/// deadline passing lets the work run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    due: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Consumes the deadline if it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.schedule(start);

        assert!(!debounce.fire(start + Duration::from_millis(299)));
        assert!(debounce.fire(start + DELAY));
        assert!(!debounce.fire(start + DELAY * 2));
    }

    #[test]
    fn rescheduling_pushes_deadline_back() {
        let start = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.schedule(start);
        debounce.schedule(start + Duration::from_millis(200));

        assert!(!debounce.fire(start + DELAY));
        assert!(debounce.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_clears_deadline() {
        let start = Instant::now();
        let mut debounce = Debounce::new(DELAY);
        debounce.schedule(start);

        debounce.cancel();

        assert!(!debounce.is_pending());
        assert!(!debounce.fire(start + DELAY * 3));
    }
}
