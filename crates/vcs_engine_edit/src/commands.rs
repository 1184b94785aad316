//! Requests against a [`GameData`] collection.

use vcs_engine::{PlayfieldId, PlayfieldMode, RegisterMode};

use crate::GameData;

#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// Append a playfield to the palette, empty or as a copy of an existing one
    AddPlayfield { height: usize, copy_of: Option<PlayfieldId> },
    /// Insert `id` into the map before `idx`, or append when `idx` is `None`
    /// or past the end
    AddToMap { id: PlayfieldId, idx: Option<usize> },
    ChangePlayfieldData { id: PlayfieldId, data: Vec<Vec<u8>> },
    ChangePlayfieldState {
        id: PlayfieldId,
        mode: PlayfieldMode,
        register_modes: Vec<RegisterMode>,
    },
    DeletePlayfield { id: PlayfieldId },
    DeleteFromMap { idx: usize },
    MoveMap { from_idx: usize, to_idx: usize },
    SelectPlayfield { id: PlayfieldId },
    SelectMap { idx: usize },
    /// Replace the whole collection
    SetState { state: Box<GameData> },
}
