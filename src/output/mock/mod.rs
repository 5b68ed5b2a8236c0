use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::game::quiz::Snapshot;
use crate::output::QuizOutput;

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    frames: Arc<RwLock<Vec<Snapshot>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Snapshot> {
        std::mem::replace(&mut *self.frames.write(), Vec::new())
    }

    pub fn last_frame(&self) -> Option<Snapshot> {
        self.frames.read().last().cloned()
    }
}

impl QuizOutput for MockQuizOutput {
    fn draw(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.frames.write().push(snapshot.clone());
        Ok(())
    }
}
