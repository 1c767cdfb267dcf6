//! Wall-clock scheduling for the round countdown and celebration overlay.

use std::time::{Duration, Instant};

use cr_core::Celebration;

/// One-second countdown driver.
///
/// There is only ever one schedule: arming again replaces the previous one,
/// so restarting a round cannot leave a second countdown running.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl RoundTimer {
    /// Create a disarmed timer firing every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// (Re)start the schedule from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Stop the schedule.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Number of whole periods that have elapsed by `now`, advancing the
    /// schedule past them.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time until the next tick, if armed.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// The single celebration display slot.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    current: Option<(Celebration, Instant)>,
}

impl Overlay {
    /// Show `celebration` from `now`, replacing whatever was shown.
    pub fn show(&mut self, celebration: Celebration, now: Instant) {
        let expires = now + celebration.duration;
        self.current = Some((celebration, expires));
    }

    /// Drop the celebration.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear the slot if its celebration has expired by `now`.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|(_, until)| *until <= now) {
            self.current = None;
        }
    }

    /// The celebration currently on display.
    pub fn current(&self) -> Option<&Celebration> {
        self.current.as_ref().map(|(c, _)| c)
    }

    /// Time until the current celebration expires.
    pub fn until_expiry(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|(_, until)| until.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::celebration;

    #[test]
    fn disarmed_timer_never_fires() {
        let mut t = RoundTimer::default();
        let now = Instant::now();
        assert_eq!(t.take_due(now + Duration::from_secs(10)), 0);
        assert!(t.until_next(now).is_none());
    }

    #[test]
    fn counts_elapsed_periods() {
        let start = Instant::now();
        let mut t = RoundTimer::default();
        t.arm(start);
        assert_eq!(t.take_due(start + Duration::from_millis(999)), 0);
        assert_eq!(t.take_due(start + Duration::from_millis(1000)), 1);
        assert_eq!(t.take_due(start + Duration::from_millis(3500)), 2);
        assert_eq!(
            t.until_next(start + Duration::from_millis(3500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn rearming_replaces_schedule() {
        let start = Instant::now();
        let mut t = RoundTimer::default();
        t.arm(start);
        t.arm(start + Duration::from_millis(900));
        assert_eq!(t.take_due(start + Duration::from_millis(1500)), 0);
        assert_eq!(t.take_due(start + Duration::from_millis(1900)), 1);
        t.disarm();
        assert!(t.until_next(start).is_none());
    }

    #[test]
    fn overlay_expires_and_is_overwritten() {
        let now = Instant::now();
        let mut o = Overlay::default();
        let word = celebration::evaluate(15, 0, 6, 1).unwrap();
        let streak = celebration::evaluate(30, 20, 4, 5).unwrap();

        o.show(word, now);
        assert!(o.current().is_some());
        o.show(streak.clone(), now + Duration::from_millis(100));
        assert_eq!(o.current(), Some(&streak));

        o.expire(now + Duration::from_millis(2000));
        assert!(o.current().is_some());
        o.expire(now + Duration::from_millis(2100));
        assert!(o.current().is_none());
    }
}
