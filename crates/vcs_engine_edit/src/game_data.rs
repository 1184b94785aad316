//! The collection a level is made of: a palette of playfields and a map.
//!
//! The palette owns every playfield. The map is an ordered list of palette
//! ids forming the level; an id may appear any number of times.

use serde::{Deserialize, Serialize};
use vcs_engine::{EngineError, Playfield, PlayfieldId, Result};

use crate::{EditorCommand, EditorEvent};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    playfields: Vec<Playfield>,
    #[serde(default)]
    map: Vec<PlayfieldId>,
    #[serde(default = "first_id")]
    next_id: PlayfieldId,
    #[serde(default)]
    selected_playfield: Option<PlayfieldId>,
    #[serde(default)]
    selected_map_idx: Option<usize>,
}

fn first_id() -> PlayfieldId {
    PlayfieldId::new(1)
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            playfields: Vec::new(),
            map: Vec::new(),
            next_id: first_id(),
            selected_playfield: None,
            selected_map_idx: None,
        }
    }
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check cross references after loading from an untrusted source
    pub fn validate(&self) -> Result<()> {
        for (i, playfield) in self.playfields.iter().enumerate() {
            if self.playfields[..i].iter().any(|p| p.id() == playfield.id()) {
                return Err(EngineError::validation(format!("duplicate playfield id {}", playfield.id())));
            }
            if playfield.id() >= self.next_id {
                return Err(EngineError::validation(format!("playfield id {} not below next id {}", playfield.id(), self.next_id)));
            }
        }
        if let Some(id) = self.map.iter().find(|id| !self.contains(**id)) {
            return Err(EngineError::UnknownPlayfield { id: *id });
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Palette
    // ═══════════════════════════════════════════════════════════════════════

    pub fn playfields(&self) -> &[Playfield] {
        &self.playfields
    }

    pub fn playfield(&self, id: PlayfieldId) -> Option<&Playfield> {
        self.playfields.iter().find(|p| p.id() == id)
    }

    pub fn playfield_mut(&mut self, id: PlayfieldId) -> Option<&mut Playfield> {
        self.playfields.iter_mut().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PlayfieldId) -> bool {
        self.playfield(id).is_some()
    }

    /// Append an empty playfield and return its id
    pub fn add_playfield(&mut self, height: usize) -> Result<PlayfieldId> {
        let playfield = Playfield::new(height)?;
        self.adopt(playfield)
    }

    /// Append a deep copy of `id` under a fresh id
    pub fn add_playfield_copy(&mut self, id: PlayfieldId) -> Result<PlayfieldId> {
        let copy = self.playfield(id).ok_or(EngineError::UnknownPlayfield { id })?.copy();
        self.adopt(copy)
    }

    fn adopt(&mut self, playfield: Playfield) -> Result<PlayfieldId> {
        let id = self.next_id;
        self.next_id = id.next()?;
        self.playfields.push(playfield.with_id(id));
        log::debug!("added playfield {id}");
        Ok(id)
    }

    /// Remove a playfield and every map entry referencing it
    ///
    /// Returns the playfield and the map indices that were removed, highest
    /// first.
    pub fn remove_playfield(&mut self, id: PlayfieldId) -> Result<(Playfield, Vec<usize>)> {
        let pos = self.playfields.iter().position(|p| p.id() == id).ok_or(EngineError::UnknownPlayfield { id })?;
        let playfield = self.playfields.remove(pos);

        let removed: Vec<usize> = (0..self.map.len()).rev().filter(|&idx| self.map[idx] == id).collect();
        for idx in &removed {
            self.map.remove(*idx);
        }

        if self.selected_playfield == Some(id) {
            self.selected_playfield = None;
        }
        if self.selected_map_idx.is_some_and(|idx| idx >= self.map.len() || !removed.is_empty()) {
            self.selected_map_idx = None;
        }
        Ok((playfield, removed))
    }

    /// Write back an edited playfield, matched by id
    pub fn replace_playfield(&mut self, playfield: Playfield) -> Result<()> {
        let id = playfield.id();
        let slot = self.playfield_mut(id).ok_or(EngineError::UnknownPlayfield { id })?;
        *slot = playfield;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Map
    // ═══════════════════════════════════════════════════════════════════════

    pub fn map(&self) -> &[PlayfieldId] {
        &self.map
    }

    pub fn map_len(&self) -> usize {
        self.map.len()
    }

    pub fn playfield_id_at_map_idx(&self, idx: usize) -> Option<PlayfieldId> {
        self.map.get(idx).copied()
    }

    /// Insert `id` before `idx`, appending when `idx` is `None` or past the
    /// end. Returns the index the entry ended up at.
    pub fn add_to_map(&mut self, id: PlayfieldId, idx: Option<usize>) -> Result<usize> {
        if !self.contains(id) {
            return Err(EngineError::UnknownPlayfield { id });
        }
        let idx = match idx {
            Some(idx) if idx < self.map.len() => {
                self.map.insert(idx, id);
                idx
            }
            _ => {
                self.map.push(id);
                self.map.len() - 1
            }
        };
        Ok(idx)
    }

    pub fn delete_from_map(&mut self, idx: usize) -> Result<PlayfieldId> {
        self.check_map_idx(idx)?;
        let id = self.map.remove(idx);
        match self.selected_map_idx {
            Some(selected) if selected == idx => self.selected_map_idx = None,
            Some(selected) if selected > idx => self.selected_map_idx = Some(selected - 1),
            _ => {}
        }
        Ok(id)
    }

    /// Move the entry at `from_idx` so it ends up at `to_idx`
    pub fn move_map(&mut self, from_idx: usize, to_idx: usize) -> Result<()> {
        self.check_map_idx(from_idx)?;
        self.check_map_idx(to_idx)?;
        let id = self.map.remove(from_idx);
        self.map.insert(to_idx, id);
        self.selected_map_idx = self.selected_map_idx.map(|selected| match selected {
            _ if selected == from_idx => to_idx,
            _ if from_idx < selected && selected <= to_idx => selected - 1,
            _ if to_idx <= selected && selected < from_idx => selected + 1,
            _ => selected,
        });
        Ok(())
    }

    fn check_map_idx(&self, idx: usize) -> Result<()> {
        if idx >= self.map.len() {
            return Err(EngineError::MapIndexOutOfRange { idx, len: self.map.len() });
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Selection
    // ═══════════════════════════════════════════════════════════════════════

    pub fn selected_playfield(&self) -> Option<PlayfieldId> {
        self.selected_playfield
    }

    pub fn selected_map_idx(&self) -> Option<usize> {
        self.selected_map_idx
    }

    pub fn select_playfield(&mut self, id: PlayfieldId) -> Result<()> {
        if !self.contains(id) {
            return Err(EngineError::UnknownPlayfield { id });
        }
        self.selected_playfield = Some(id);
        Ok(())
    }

    /// Select a map entry; this also selects the playfield it references
    pub fn select_map(&mut self, idx: usize) -> Result<PlayfieldId> {
        let id = self.playfield_id_at_map_idx(idx).ok_or(EngineError::MapIndexOutOfRange { idx, len: self.map.len() })?;
        self.selected_map_idx = Some(idx);
        self.selected_playfield = Some(id);
        Ok(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply a command and return the events describing what changed
    ///
    /// A failing command leaves the collection unchanged.
    pub fn execute(&mut self, command: EditorCommand) -> Result<Vec<EditorEvent>> {
        log::debug!("execute {command:?}");
        let events = match command {
            EditorCommand::AddPlayfield { height, copy_of } => {
                let id = match copy_of {
                    Some(source) => self.add_playfield_copy(source)?,
                    None => self.add_playfield(height)?,
                };
                vec![EditorEvent::PlayfieldAdded { id }]
            }
            EditorCommand::AddToMap { id, idx } => {
                let idx = self.add_to_map(id, idx)?;
                vec![EditorEvent::MapAdded { id, idx }]
            }
            EditorCommand::ChangePlayfieldData { id, data } => {
                let playfield = self.playfield_mut(id).ok_or(EngineError::UnknownPlayfield { id })?;
                playfield.set_data(&data)?;
                vec![EditorEvent::PlayfieldDataChanged { id, data: playfield.data() }]
            }
            EditorCommand::ChangePlayfieldState { id, mode, register_modes } => {
                let playfield = self.playfield_mut(id).ok_or(EngineError::UnknownPlayfield { id })?;
                playfield.set_register_modes(&register_modes)?;
                playfield.set_mode(mode);
                vec![
                    EditorEvent::PlayfieldStateChanged {
                        id,
                        mode: playfield.mode(),
                        register_modes: playfield.register_modes(),
                    },
                    EditorEvent::PlayfieldDataChanged { id, data: playfield.data() },
                ]
            }
            EditorCommand::DeletePlayfield { id } => {
                let (_, removed) = self.remove_playfield(id)?;
                let mut events: Vec<EditorEvent> = removed.into_iter().map(|idx| EditorEvent::MapDeleted { idx }).collect();
                events.push(EditorEvent::PlayfieldDeleted { id });
                events
            }
            EditorCommand::DeleteFromMap { idx } => {
                self.delete_from_map(idx)?;
                vec![EditorEvent::MapDeleted { idx }]
            }
            EditorCommand::MoveMap { from_idx, to_idx } => {
                self.move_map(from_idx, to_idx)?;
                vec![EditorEvent::MapMoved { from_idx, to_idx }]
            }
            EditorCommand::SelectPlayfield { id } => {
                self.select_playfield(id)?;
                vec![EditorEvent::PlayfieldSelected { id }]
            }
            EditorCommand::SelectMap { idx } => {
                let id = self.select_map(idx)?;
                vec![EditorEvent::MapSelected { idx }, EditorEvent::PlayfieldSelected { id }]
            }
            EditorCommand::SetState { state } => {
                state.validate()?;
                *self = *state;
                vec![EditorEvent::StateSet]
            }
        };
        Ok(events)
    }
}
