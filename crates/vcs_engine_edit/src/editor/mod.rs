//! Pointer driven editing of a single playfield.
//!
//! The session is a two state machine (`Idle`, `StrokeActive`). A stroke
//! starts on pointer-down, is previewed on every move into a new cell and
//! committed to the undo history on pointer-up.

mod session;
mod stroke;

pub use session::EditorSession;
pub use stroke::StrokeContext;

use bitflags::bitflags;
use vcs_engine::Position;

bitflags! {
    /// Pressed pointer buttons, same bit layout as the DOM `buttons` mask
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PointerButtons: u32 {
        const PRIMARY = 0b0001;
        const SECONDARY = 0b0010;
        const AUXILIARY = 0b0100;
    }
}

impl PointerButtons {
    /// Value a stroke writes: the secondary button erases
    pub fn stroke_value(self) -> u8 {
        if self.contains(PointerButtons::SECONDARY) {
            0
        } else {
            1
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    StrokeActive,
}

/// Size of one playfield cell in device units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grid cell under a device coordinate
    ///
    /// Coordinates left of or above the grid map to negative cells, which the
    /// playfield ignores.
    pub fn to_grid(self, device_x: f64, device_y: f64) -> Position {
        Position::new((device_x / self.width).floor() as i32, (device_y / self.height).floor() as i32)
    }

    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
