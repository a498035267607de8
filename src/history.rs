//! Snapshot History - Linear Undo/Redo
//!
//! `snapshots[cursor]` is always the visible state. Recording after an undo
//! drops every redo entry before appending. Growth is unbounded.

use tracing::debug;

#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> History<T> {
    /// Start a session with `initial` as the only snapshot.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Commit `next` as the new visible snapshot.
    pub fn record(&mut self, next: T) -> &T {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
        debug!(cursor = self.cursor, "history recorded");
        self.current()
    }

    /// Swap the visible snapshot for `next` without adding an undo step.
    pub fn replace_current(&mut self, next: T) -> &T {
        self.snapshots[self.cursor] = next;
        self.current()
    }

    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.cursor -= 1;
            debug!(cursor = self.cursor, "history undo");
        }
        self.current()
    }

    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.cursor += 1;
            debug!(cursor = self.cursor, "history redo");
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_history_cannot_undo() {
        let mut history = History::new(0);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(*history.undo(), 0);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_walks_cursor() {
        let mut history = History::new(0);
        history.record(1);
        history.record(2);
        assert_eq!(*history.undo(), 1);
        assert_eq!(*history.undo(), 0);
        assert_eq!(*history.undo(), 0);
        assert_eq!(*history.redo(), 1);
        assert_eq!(*history.redo(), 2);
        assert_eq!(*history.redo(), 2);
    }

    #[test]
    fn test_record_after_undo_drops_redo() {
        let mut history = History::new(0);
        history.record(1);
        history.record(2);
        history.undo();
        history.record(3);
        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert_eq!(*history.undo(), 1);
    }

    #[test]
    fn test_replace_current_keeps_length() {
        let mut history = History::new(0);
        history.record(1);
        history.replace_current(10);
        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 10);
        assert_eq!(*history.undo(), 0);
    }
}
