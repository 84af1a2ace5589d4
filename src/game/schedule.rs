use std::time::Duration;

/// One logical simulation step. The update loop runs one step per display
/// refresh; velocities are expressed per tick.
pub const TICK: Duration = Duration::from_millis(16);

/// Number of whole ticks covering `delay`, rounded up.
pub fn ticks_of(delay: Duration) -> u64 {
    let tick_ms = TICK.as_millis();
    ((delay.as_millis() + tick_ms - 1) / tick_ms) as u64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    AdvanceLevel,
    GameOver,
    Restart,
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: u64,
    action: DeferredAction,
}

/// Delayed one-shot actions, counted in simulation ticks. Replaces wall-clock
/// timers so deferred transitions stay ordered relative to the stepping loop.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    pending: Vec<Scheduled>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, action: DeferredAction, delay: Duration, now: u64) {
        self.pending.push(Scheduled {
            due: now + ticks_of(delay),
            action,
        });
    }

    /// Removes and returns everything due at `now`, ordered by due tick and
    /// then insertion order.
    pub fn drain_due(&mut self, now: u64) -> Vec<DeferredAction> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                fired.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        fired.sort_by_key(|scheduled| scheduled.due);
        fired.into_iter().map(|scheduled| scheduled.action).collect()
    }
}

/// Fixed-interval ticker driving the ball's sprite animation.
#[derive(Clone, Debug)]
pub struct FrameTicker {
    period: u64,
    next_due: u64,
}

impl FrameTicker {
    pub fn new(interval: Duration, now: u64) -> Self {
        let period = ticks_of(interval).max(1);
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn fires_at(&mut self, now: u64) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Duration::from_millis(16), 1)]
    #[case(Duration::from_millis(10), 1)]
    #[case(Duration::from_millis(80), 5)]
    #[case(Duration::from_millis(120), 8)]
    #[case(Duration::from_secs(4), 250)]
    fn delay_to_ticks(#[case] delay: Duration, #[case] expected: u64) {
        assert_eq!(ticks_of(delay), expected);
    }

    #[test]
    fn drain_returns_due_actions_in_order() {
        let mut queue = ActionQueue::new();
        queue.schedule(DeferredAction::GameOver, Duration::from_millis(32), 0);
        queue.schedule(DeferredAction::AdvanceLevel, Duration::from_millis(16), 0);
        queue.schedule(DeferredAction::Restart, Duration::from_millis(32), 0);

        assert_eq!(queue.drain_due(0), vec![]);
        assert_eq!(queue.drain_due(1), vec![DeferredAction::AdvanceLevel]);
        // same due tick: insertion order
        assert_eq!(
            queue.drain_due(5),
            vec![DeferredAction::GameOver, DeferredAction::Restart]
        );
        assert_eq!(queue.drain_due(100), vec![]);
    }

    #[test]
    fn frame_ticker_cadence() {
        let mut ticker = FrameTicker::new(Duration::from_millis(80), 10);
        let fired: Vec<u64> = (11..=25).filter(|&t| ticker.fires_at(t)).collect();
        assert_eq!(fired, vec![15, 20, 25]);
    }
}
