use std::time::Duration;

#[cfg(test)]
pub mod mock;

/// Identifies one armed timer. The generation lets the quiz tell a timer
/// armed for its current feedback apart from one left over from before a
/// restart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimerId {
    pub generation: u64,
}

pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, timer: TimerId);
}

#[derive(Debug)]
struct PendingTimer {
    timer: TimerId,
    time_elapsed: Duration,
    time_to_wait: Duration,
}

/// Fires timers from the frame loop: every `tick` adds the frame time to
/// each pending timer and hands back those that are due.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Vec<PendingTimer>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn tick(&mut self, dt: Duration) -> Vec<TimerId> {
        for pending in self.pending.iter_mut() {
            pending.time_elapsed += dt;
        }
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| p.time_elapsed >= p.time_to_wait);
        self.pending = pending;
        due.into_iter().map(|p| p.timer).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for TickScheduler {
    fn schedule_once(&mut self, delay: Duration, timer: TimerId) {
        self.pending.push(PendingTimer {
            timer,
            time_elapsed: Duration::default(),
            time_to_wait: delay,
        });
    }
}
