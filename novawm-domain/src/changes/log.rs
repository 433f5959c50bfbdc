use std::collections::VecDeque;

use tracing::trace;

use super::events::Change;

/// FIFO queue of [`Change`] records with a single consumer.
///
/// The model pushes; the display binding drains once per batch of mutations.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    queue: VecDeque<Change>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: Change) {
        trace!(?change, "change queued");
        self.queue.push_back(change);
    }

    pub fn has_more(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Removes and returns the oldest record.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Change> {
        self.queue.pop_front()
    }

    /// Drains every pending record, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Change> + '_ {
        self.queue.drain(..)
    }

    /// Discards every pending record.
    pub fn flush(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
