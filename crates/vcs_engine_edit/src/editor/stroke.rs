use vcs_engine::{Playfield, Position};

use crate::brushes::DrawMode;

/// State of the stroke in progress
#[derive(Clone, Debug)]
pub struct StrokeContext {
    /// Playfield as it was at pointer-down, only kept for shape modes
    pub snapshot: Option<Playfield>,
    pub start: Position,
    pub last: Position,
    /// Value written by the whole stroke, fixed at pointer-down
    pub value: u8,
    pub mode: DrawMode,
}

impl StrokeContext {
    pub fn new(playfield: &Playfield, mode: DrawMode, start: Position, value: u8) -> Self {
        Self {
            snapshot: mode.needs_snapshot().then(|| playfield.copy()),
            start,
            last: start,
            value,
            mode,
        }
    }
}
