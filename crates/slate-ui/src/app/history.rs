use std::collections::VecDeque;

/// Snapshot undo/redo for the text widget.
///
/// iced's editor keeps no history, so a copy of the whole buffer is taken
/// before every edit.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: VecDeque<String>,
    redo_stack: Vec<String>,
}

impl History {
    /// Oldest snapshots are dropped past this many.
    pub const LIMIT: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Records the buffer as it was before an edit.
    pub fn record(&mut self, before: String) {
        // Only save if different from last state
        if self.undo_stack.back() == Some(&before) {
            return;
        }
        self.undo_stack.push_back(before);
        if self.undo_stack.len() > Self::LIMIT {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Steps back from `current`, returning the text to show.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    /// Forgets everything, for when the document is replaced.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
