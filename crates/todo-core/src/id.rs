use web_time::{SystemTime, UNIX_EPOCH};

use crate::TaskId;

/// Wall-clock source for task ids. Swappable so tests can freeze time.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Hands out timestamp-shaped ids that are strictly increasing, even when
/// several tasks are added inside the same millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now_millis: u64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_clock() {
        let mut g = IdGenerator::new();
        assert_eq!(g.next(1_000), TaskId(1_000));
        assert_eq!(g.next(2_500), TaskId(2_500));
    }

    #[test]
    fn test_ids_unique_within_same_tick() {
        let mut g = IdGenerator::new();
        let a = g.next(42);
        let b = g.next(42);
        let c = g.next(42);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_clock_going_backwards_keeps_order() {
        let mut g = IdGenerator::new();
        let a = g.next(500);
        let b = g.next(100);
        assert_eq!(b, TaskId(501));
        assert!(a < b);
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
