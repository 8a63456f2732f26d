//! Bounded, cursor-based undo/redo history.
//!
//! Entries are kept in one linear list with a cursor naming the newest entry that is
//! "behind" the live state. `undo` hands back the entry under the cursor and steps the
//! cursor back; `redo` steps forward first and hands back the entry it lands on. Pushing
//! after an undo discards everything past the cursor.

/// Maximum number of snapshots the studio keeps.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
/// A recorded snapshot with the action that caused it.
pub struct HistoryEntry<S> {
    /// Short description of the change that followed this snapshot.
    pub label: String,
    /// State captured before that change.
    pub snapshot: S,
}

#[derive(Clone, Debug, PartialEq)]
/// Linear snapshot history capped at `max_entries`.
pub struct History<S> {
    entries: Vec<HistoryEntry<S>>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

impl<S> History<S> {
    /// Empty history. A cap of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_entries: max_entries.max(1),
        }
    }

    /// Record a snapshot. Any redo branch past the cursor is dropped and the oldest
    /// entries are evicted beyond the cap.
    pub fn push(&mut self, label: &str, snapshot: S) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let dropped = self.entries.len().saturating_sub(keep);
        self.entries.truncate(keep);

        self.entries.push(HistoryEntry {
            label: label.to_owned(),
            snapshot,
        });
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.cursor = Some(self.entries.len() - 1);

        tracing::debug!(
            label,
            dropped_redo = dropped,
            depth = self.entries.len(),
            "history entry pushed"
        );
    }

    /// Snapshot under the cursor, then move the cursor back. `None` when nothing is left.
    pub fn undo(&mut self) -> Option<&S> {
        let at = self.cursor?;
        self.cursor = at.checked_sub(1);
        let entry = &self.entries[at];
        tracing::debug!(label = %entry.label, index = at, "undo");
        Some(&entry.snapshot)
    }

    /// Move the cursor forward, then return the snapshot there. `None` at the tail.
    pub fn redo(&mut self) -> Option<&S> {
        let next = self.cursor.map_or(0, |c| c + 1);
        let entry = self.entries.get(next)?;
        self.cursor = Some(next);
        tracing::debug!(label = %entry.label, index = next, "redo");
        Some(&entry.snapshot)
    }

    /// Whether [`History::undo`] would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Whether [`History::redo`] would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position; `None` means everything has been undone.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Configured cap.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Labels oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/stack.rs"]
mod tests;
