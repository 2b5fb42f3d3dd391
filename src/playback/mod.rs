//! Playback over a finished trace
//!
//! [`Playback`] owns one fully materialized snapshot sequence and a cursor
//! into it. Moving backward never re-runs the algorithm: every position is
//! already recorded. All operations clamp instead of failing.

use crate::snapshot::Snapshot;

/// Cursor over a recorded trace
#[derive(Debug, Clone, Default)]
pub struct Playback {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Playback {
    pub fn new(snapshots: Vec<Snapshot>) -> Self {
        Playback {
            snapshots,
            cursor: 0,
        }
    }

    /// Replace the trace with a new run's and rewind to its first step
    pub fn load(&mut self, snapshots: Vec<Snapshot>) {
        self.snapshots = snapshots;
        self.cursor = 0;
    }

    /// Jump to `index`, clamped into `[0, len - 1]`. Returns the new cursor.
    pub fn seek(&mut self, index: i64) -> usize {
        let last = self.snapshots.len().saturating_sub(1);
        self.cursor = if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(last, |i| i.min(last))
        };
        self.cursor
    }

    /// Step forward one snapshot. Returns false at the end.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Step backward one snapshot. Returns false at the start.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to the first snapshot
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last snapshot
    pub fn jump_to_end(&mut self) {
        self.cursor = self.snapshots.len().saturating_sub(1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.cursor)
    }

    /// `(cursor, snapshot at cursor)` as handed to the renderer
    pub fn position(&self) -> (usize, Option<&Snapshot>) {
        (self.cursor, self.current())
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.snapshots.len()
    }
}
