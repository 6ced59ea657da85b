// Work deferred to the next rendering frame. Everything runs on the UI thread,
// so a plain FIFO is enough; tasks are idempotent and the last write wins.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameTask {
    RecordLastCommand(String),
}

#[derive(Debug, Default)]
pub struct FrameQueue(VecDeque<FrameTask>);

impl FrameQueue {
    pub fn push(&mut self, task: FrameTask) {
        self.0.push_back(task);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = FrameTask> + '_ {
        self.0.drain(..)
    }
}
