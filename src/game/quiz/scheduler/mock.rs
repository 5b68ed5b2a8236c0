use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use super::{Scheduler, TimerId};

#[derive(Clone, Default)]
pub struct MockScheduler {
    armed: Arc<RwLock<Vec<(Duration, TimerId)>>>,
}

impl MockScheduler {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn take_armed(&self) -> Vec<(Duration, TimerId)> {
        std::mem::replace(&mut *self.armed.write(), Vec::new())
    }

    pub fn armed_count(&self) -> usize {
        self.armed.read().len()
    }
}

impl Scheduler for MockScheduler {
    fn schedule_once(&mut self, delay: Duration, timer: TimerId) {
        self.armed.write().push((delay, timer));
    }
}
