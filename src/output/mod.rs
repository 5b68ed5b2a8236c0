use anyhow::Result;

use crate::game::quiz::Snapshot;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub trait QuizOutput {
    fn draw(&mut self, snapshot: &Snapshot) -> Result<()>;
}
