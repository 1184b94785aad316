use std::sync::mpsc;

use vcs_engine::{EngineError, Playfield, PlayfieldMode, RegisterMode, Result};

use super::{CellSize, PointerButtons, SessionState, StrokeContext};
use crate::{
    brushes::DrawMode,
    undo_stack::{UndoHistory, UndoState},
    EditorEvent,
};

/// Editing session for one playfield
///
/// Notifications are delivered over the channel returned by
/// [`EditorSession::new`]. Dropping the receiver is fine; events are then
/// discarded.
pub struct EditorSession {
    playfield: Playfield,
    history: UndoHistory,
    draw_mode: DrawMode,
    cell_size: CellSize,
    stroke: Option<StrokeContext>,
    needs_redraw: bool,

    /// Outgoing event channel
    event_tx: mpsc::Sender<EditorEvent>,
}

impl EditorSession {
    pub fn new(playfield: Playfield, cell_size: CellSize) -> (Self, mpsc::Receiver<EditorEvent>) {
        Self::with_history(playfield, UndoHistory::new(), cell_size)
    }

    /// Create a session that continues an existing history
    pub fn with_history(playfield: Playfield, history: UndoHistory, cell_size: CellSize) -> (Self, mpsc::Receiver<EditorEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let mut session = Self {
            playfield,
            history,
            draw_mode: DrawMode::default(),
            cell_size,
            stroke: None,
            needs_redraw: true,
            event_tx,
        };
        session.seed_history();
        (session, event_rx)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Hand back the edited playfield and its history
    pub fn into_parts(self) -> (Playfield, UndoHistory) {
        (self.playfield, self.history)
    }

    pub fn state(&self) -> SessionState {
        if self.stroke.is_some() {
            SessionState::StrokeActive
        } else {
            SessionState::Idle
        }
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Whether the playfield changed since the renderer last cleared the flag
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Configuration
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_draw_mode(&mut self, mode: DrawMode) -> Result<()> {
        self.ensure_idle()?;
        self.draw_mode = mode;
        Ok(())
    }

    pub fn set_cell_size(&mut self, width: f64, height: f64) -> Result<()> {
        let cell_size = CellSize::new(width, height);
        if !cell_size.is_valid() {
            return Err(EngineError::validation(format!("invalid cell size {width}x{height}")));
        }
        self.cell_size = cell_size;
        Ok(())
    }

    /// Switch to another playfield and return the one edited so far
    pub fn select_playfield(&mut self, playfield: Playfield) -> Result<Playfield> {
        self.ensure_idle()?;
        let previous = std::mem::replace(&mut self.playfield, playfield);
        self.seed_history();
        self.needs_redraw = true;
        Ok(previous)
    }

    pub fn set_playfield_mode(&mut self, mode: PlayfieldMode) -> Result<()> {
        self.ensure_idle()?;
        self.playfield.set_mode(mode);
        self.commit_state_change();
        Ok(())
    }

    pub fn set_register_mode(&mut self, register: usize, mode: RegisterMode) -> Result<()> {
        self.ensure_idle()?;
        self.playfield.set_register_mode(register, mode)?;
        self.commit_state_change();
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pointer input
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pointer_down(&mut self, device_x: f64, device_y: f64, buttons: PointerButtons) {
        if self.stroke.is_some() {
            return;
        }
        let pos = self.cell_size.to_grid(device_x, device_y);
        let value = buttons.stroke_value();
        log::debug!("stroke start {} at {pos} value {value} on playfield {}", self.draw_mode, self.playfield.id());

        let stroke = StrokeContext::new(&self.playfield, self.draw_mode, pos, value);
        stroke.mode.rasterizer().on_stroke_start(&mut self.playfield, pos, value);
        self.stroke = Some(stroke);
        self.needs_redraw = true;
    }

    /// Buttons are ignored here; polarity was fixed at pointer-down.
    pub fn pointer_move(&mut self, device_x: f64, device_y: f64, _buttons: PointerButtons) {
        let pos = self.cell_size.to_grid(device_x, device_y);
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if pos == stroke.last {
            return;
        }
        stroke
            .mode
            .rasterizer()
            .on_stroke_move(stroke.snapshot.as_ref(), stroke.start, &mut self.playfield, pos, stroke.value);
        stroke.last = pos;
        self.needs_redraw = true;
    }

    pub fn pointer_up(&mut self) {
        let Some(stroke) = self.stroke.take() else {
            return;
        };
        log::debug!("stroke end {} at {} on playfield {}", stroke.mode, stroke.last, self.playfield.id());
        self.history.push_snapshot(self.playfield.id(), self.playfield.copy());
        self.send_data_changed();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn ensure_idle(&self) -> Result<()> {
        if self.stroke.is_some() {
            return Err(EngineError::StrokeInProgress);
        }
        Ok(())
    }

    fn seed_history(&mut self) {
        let id = self.playfield.id();
        if !self.history.contains(id) {
            self.history.push_snapshot(id, self.playfield.copy());
        }
    }

    fn commit_state_change(&mut self) {
        self.history.push_snapshot(self.playfield.id(), self.playfield.copy());
        self.needs_redraw = true;
        self.send_state_changed();
        self.send_data_changed();
    }

    fn send(&self, event: EditorEvent) {
        // a dropped receiver only means nobody is listening
        let _ = self.event_tx.send(event);
    }

    fn send_data_changed(&self) {
        self.send(EditorEvent::PlayfieldDataChanged {
            id: self.playfield.id(),
            data: self.playfield.data(),
        });
    }

    fn send_state_changed(&self) {
        self.send(EditorEvent::PlayfieldStateChanged {
            id: self.playfield.id(),
            mode: self.playfield.mode(),
            register_modes: self.playfield.register_modes(),
        });
    }
}

impl UndoState for EditorSession {
    fn can_undo(&self) -> bool {
        self.stroke.is_none() && self.history.can_undo(self.playfield.id())
    }

    fn undo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(snapshot) = self.history.undo(self.playfield.id()) else {
            return Ok(false);
        };
        self.playfield.restore_from(snapshot);
        self.needs_redraw = true;
        self.send_data_changed();
        self.send_state_changed();
        Ok(true)
    }

    fn can_redo(&self) -> bool {
        self.stroke.is_none() && self.history.can_redo(self.playfield.id())
    }

    fn redo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(snapshot) = self.history.redo(self.playfield.id()) else {
            return Ok(false);
        };
        self.playfield.restore_from(snapshot);
        self.needs_redraw = true;
        self.send_data_changed();
        self.send_state_changed();
        Ok(true)
    }
}
