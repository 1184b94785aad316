//! Snapshot history for playfield editing
//!
//! Every committed edit stores a full copy of the playfield. Playfields are a
//! few hundred bytes, so snapshots are cheaper to reason about than inverse
//! operations. Histories are kept per [`PlayfieldId`] so switching between
//! playfields keeps each one's undo state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vcs_engine::{Playfield, PlayfieldId, Result};

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation, `Ok(false)` when there is nothing to undo
    fn undo(&mut self) -> Result<bool>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation, `Ok(false)` when there is nothing to redo
    fn redo(&mut self) -> Result<bool>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct SnapshotStack {
    snapshots: Vec<Playfield>,
    cursor: usize,
}

impl SnapshotStack {
    fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }
}

/// Linear undo history per playfield
///
/// The cursor points at the snapshot matching the current playfield state.
/// Pushing after an undo discards everything after the cursor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoHistory {
    stacks: HashMap<PlayfieldId, SnapshotStack>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` as the newest state of `id`
    pub fn push_snapshot(&mut self, id: PlayfieldId, snapshot: Playfield) {
        let stack = self.stacks.entry(id).or_default();
        if !stack.snapshots.is_empty() {
            stack.snapshots.truncate(stack.cursor + 1);
        }
        stack.snapshots.push(snapshot);
        stack.cursor = stack.last_index();
    }

    /// Step back and return the snapshot to restore
    pub fn undo(&mut self, id: PlayfieldId) -> Option<&Playfield> {
        let stack = self.stacks.get_mut(&id)?;
        if stack.cursor == 0 {
            return None;
        }
        stack.cursor -= 1;
        stack.snapshots.get(stack.cursor)
    }

    /// Step forward and return the snapshot to restore
    pub fn redo(&mut self, id: PlayfieldId) -> Option<&Playfield> {
        let stack = self.stacks.get_mut(&id)?;
        if stack.cursor >= stack.last_index() {
            return None;
        }
        stack.cursor += 1;
        stack.snapshots.get(stack.cursor)
    }

    pub fn can_undo(&self, id: PlayfieldId) -> bool {
        self.stacks.get(&id).is_some_and(|s| s.cursor > 0)
    }

    pub fn can_redo(&self, id: PlayfieldId) -> bool {
        self.stacks.get(&id).is_some_and(|s| s.cursor < s.last_index())
    }

    /// Number of snapshots stored for `id`
    pub fn len(&self, id: PlayfieldId) -> usize {
        self.stacks.get(&id).map_or(0, |s| s.snapshots.len())
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.values().all(|s| s.snapshots.is_empty())
    }

    pub fn cursor(&self, id: PlayfieldId) -> Option<usize> {
        self.stacks.get(&id).map(|s| s.cursor)
    }

    /// Snapshot at the cursor, i.e. the last committed state
    pub fn current(&self, id: PlayfieldId) -> Option<&Playfield> {
        self.stacks.get(&id).and_then(|s| s.snapshots.get(s.cursor))
    }

    pub fn contains(&self, id: PlayfieldId) -> bool {
        self.stacks.contains_key(&id)
    }

    /// Drop the history of a deleted playfield
    pub fn remove(&mut self, id: PlayfieldId) -> bool {
        self.stacks.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.stacks.clear();
    }
}
