//! Notifications emitted by the editor and the game data collection.
//!
//! Every event that carries playfield state also carries the id of the
//! playfield it belongs to.

use vcs_engine::{PlayfieldId, PlayfieldMode, RegisterMode, REGISTER_COUNT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// A playfield id was inserted into the map at `idx`
    MapAdded { id: PlayfieldId, idx: usize },
    MapDeleted { idx: usize },
    MapMoved { from_idx: usize, to_idx: usize },
    MapSelected { idx: usize },
    /// A playfield was appended to the palette
    PlayfieldAdded { id: PlayfieldId },
    PlayfieldDeleted { id: PlayfieldId },
    /// The bitmap of a playfield changed (stroke end, undo, redo, replace)
    PlayfieldDataChanged { id: PlayfieldId, data: Vec<Vec<u8>> },
    /// Mode or register overrides of a playfield changed
    PlayfieldStateChanged {
        id: PlayfieldId,
        mode: PlayfieldMode,
        register_modes: [RegisterMode; REGISTER_COUNT],
    },
    PlayfieldSelected { id: PlayfieldId },
    StateLoaded { name: String },
    StateSaved { name: String },
    /// The whole collection was replaced
    StateSet,
}

impl EditorEvent {
    /// Id of the playfield this event is about, if any
    pub fn playfield_id(&self) -> Option<PlayfieldId> {
        match self {
            EditorEvent::MapAdded { id, .. }
            | EditorEvent::PlayfieldAdded { id }
            | EditorEvent::PlayfieldDeleted { id }
            | EditorEvent::PlayfieldDataChanged { id, .. }
            | EditorEvent::PlayfieldStateChanged { id, .. }
            | EditorEvent::PlayfieldSelected { id } => Some(*id),
            _ => None,
        }
    }
}
