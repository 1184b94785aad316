//! The playfield bitmap.
//!
//! Every write goes through the same two steps: the value is filtered by the
//! register mode of the column's zone, then stored in the column and in its
//! mirrored partner. Mode and register changes re-run that step over the left
//! half so the mirror and register constraints hold after any mutation.

mod id;
mod modes;
mod persisted;

pub use id::PlayfieldId;
pub use modes::{PlayfieldMode, RegisterMode};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Width of every playfield in cells.
pub const PLAYFIELD_WIDTH: usize = 40;

/// Width of the independently drawable left half.
pub const PLAYFIELD_HALF_WIDTH: usize = PLAYFIELD_WIDTH / 2;

/// Number of playfield registers (PF0, PF1, PF2).
pub const REGISTER_COUNT: usize = 3;

type Row = [u8; PLAYFIELD_WIDTH];

/// A 40 column binary bitmap with enforced mirror symmetry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "persisted::PersistedPlayfield", into = "persisted::PersistedPlayfield")]
pub struct Playfield {
    id: PlayfieldId,
    mode: PlayfieldMode,
    register_modes: [RegisterMode; REGISTER_COUNT],
    data: Vec<Row>,
}

impl Playfield {
    /// Create an empty playfield: all zero, `Normal`, every register `Draw`.
    pub fn new(height: usize) -> Result<Self> {
        if height == 0 {
            return Err(EngineError::InvalidHeight);
        }
        Ok(Self {
            id: PlayfieldId::default(),
            mode: PlayfieldMode::Normal,
            register_modes: [RegisterMode::Draw; REGISTER_COUNT],
            data: vec![[0; PLAYFIELD_WIDTH]; height],
        })
    }

    /// Create a playfield from an initial state.
    ///
    /// `data` must have exactly `height` rows of `PLAYFIELD_WIDTH` binary values
    /// and `register_modes` exactly three entries. The invariant is applied to
    /// the supplied data, so a right half that disagrees with the left half is
    /// overwritten.
    pub fn from_parts(height: usize, mode: PlayfieldMode, data: Option<&[Vec<u8>]>, register_modes: Option<&[RegisterMode]>) -> Result<Self> {
        let register_modes = match register_modes {
            Some(modes) => Self::check_register_modes(modes)?,
            None => [RegisterMode::Draw; REGISTER_COUNT],
        };
        let mut playfield = match data {
            Some(rows) => {
                if height == 0 {
                    return Err(EngineError::InvalidHeight);
                }
                // rows are checked before any grid of `height` is allocated
                Self {
                    id: PlayfieldId::default(),
                    mode,
                    register_modes,
                    data: Self::check_data(height, rows)?,
                }
            }
            None => Self::new(height)?,
        };
        playfield.mode = mode;
        playfield.register_modes = register_modes;
        playfield.redraw_pixels();
        Ok(playfield)
    }

    /// Deep copy, keeping the id.
    ///
    /// Collections that add the copy as a new entry assign a fresh id with
    /// [`Playfield::with_id`].
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Same playfield under a different id.
    pub fn with_id(mut self, id: PlayfieldId) -> Self {
        self.id = id;
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn id(&self) -> PlayfieldId {
        self.id
    }

    pub fn width(&self) -> usize {
        PLAYFIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        self.data.len()
    }

    pub fn mode(&self) -> PlayfieldMode {
        self.mode
    }

    /// Copy of the register modes.
    pub fn register_modes(&self) -> [RegisterMode; REGISTER_COUNT] {
        self.register_modes
    }

    /// Deep copy of the bitmap, row-major.
    pub fn data(&self) -> Vec<Vec<u8>> {
        self.data.iter().map(|row| row.to_vec()).collect()
    }

    /// Read-only view of the rows.
    pub fn rows(&self) -> &[[u8; PLAYFIELD_WIDTH]] {
        &self.data
    }

    /// Number of cells that are set.
    pub fn count_set(&self) -> usize {
        self.data.iter().flat_map(|row| row.iter()).filter(|&&v| v != 0).count()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pixel access
    // ═══════════════════════════════════════════════════════════════════════

    /// Write `value` at (x, y) and at its mirror. Out of bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) {
        if let Some((x, y)) = self.cell(x, y) {
            self.update_pixels(x, y, value);
        }
    }

    /// Write like [`Playfield::set_pixel`] and return the value that was there before.
    ///
    /// Returns `value` itself for out of bounds coordinates, so callers can
    /// compare the result against `value` to see whether anything changed.
    pub fn swap_pixel(&mut self, x: i32, y: i32, value: u8) -> u8 {
        let Some((x, y)) = self.cell(x, y) else {
            return value;
        };
        let old_value = self.data[y][x];
        self.update_pixels(x, y, value);
        old_value
    }

    /// Value at (x, y), 0 when out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match self.cell(x, y) {
            Some((x, y)) => self.data[y][x],
            None => 0,
        }
    }

    /// Overwrite the bitmap with the bitmap of another playfield.
    ///
    /// Used to restore a frozen snapshot during shape previews. Heights must
    /// match; a snapshot of a different height is rejected.
    pub fn restore_data_from(&mut self, snapshot: &Playfield) -> Result<()> {
        if snapshot.height() != self.height() {
            return Err(EngineError::DataSizeMismatch {
                expected: self.height(),
                actual: snapshot.height(),
            });
        }
        self.data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    /// Replace this playfield's complete state (bitmap, mode, registers) with
    /// the snapshot's, keeping the id.
    pub fn restore_from(&mut self, snapshot: &Playfield) {
        self.mode = snapshot.mode;
        self.register_modes = snapshot.register_modes;
        self.data.clone_from(&snapshot.data);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the bitmap. The row count must equal the height.
    pub fn set_data(&mut self, rows: &[Vec<u8>]) -> Result<()> {
        self.data = Self::check_data(self.height(), rows)?;
        self.redraw_pixels();
        Ok(())
    }

    /// Switch the mirror mode and re-apply the invariant to every row.
    ///
    /// The left half is kept, the right half is rebuilt from it.
    pub fn set_mode(&mut self, mode: PlayfieldMode) {
        self.mode = mode;
        self.redraw_pixels();
    }

    /// Set the override of one register zone and re-apply the invariant.
    pub fn set_register_mode(&mut self, register: usize, mode: RegisterMode) -> Result<()> {
        if register >= REGISTER_COUNT {
            return Err(EngineError::InvalidRegister { register });
        }
        self.register_modes[register] = mode;
        self.redraw_pixels();
        Ok(())
    }

    /// Set all three register overrides at once.
    pub fn set_register_modes(&mut self, modes: &[RegisterMode]) -> Result<()> {
        self.register_modes = Self::check_register_modes(modes)?;
        self.redraw_pixels();
        Ok(())
    }

    /// Change the height. Any change discards the bitmap.
    pub fn set_height(&mut self, height: usize) -> Result<()> {
        if height == 0 {
            return Err(EngineError::InvalidHeight);
        }
        if height != self.height() {
            log::debug!("playfield {}: height {} -> {}, clearing data", self.id, self.height(), height);
            self.data = vec![[0; PLAYFIELD_WIDTH]; height];
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= PLAYFIELD_WIDTH || y >= self.height() {
            return None;
        }
        Some((x, y))
    }

    fn update_pixels(&mut self, x: usize, y: usize, value: u8) {
        let filtered = self.filter_register_value(x, u8::from(value != 0));
        let mirror = self.mode.mirror(x);
        let row = &mut self.data[y];
        row[x] = filtered;
        row[mirror] = filtered;
    }

    fn filter_register_value(&self, x: usize, value: u8) -> u8 {
        self.register_modes[self.mode.register_zone(x)].filter(value)
    }

    fn redraw_pixels(&mut self) {
        for y in 0..self.data.len() {
            for x in 0..PLAYFIELD_HALF_WIDTH {
                let value = self.data[y][x];
                self.update_pixels(x, y, value);
            }
        }
    }

    fn check_register_modes(modes: &[RegisterMode]) -> Result<[RegisterMode; REGISTER_COUNT]> {
        <[RegisterMode; REGISTER_COUNT]>::try_from(modes).map_err(|_| EngineError::RegisterCountMismatch { len: modes.len() })
    }

    fn check_data(height: usize, rows: &[Vec<u8>]) -> Result<Vec<Row>> {
        if rows.len() != height {
            return Err(EngineError::DataSizeMismatch {
                expected: height,
                actual: rows.len(),
            });
        }
        let mut data = Vec::with_capacity(height);
        for (y, row) in rows.iter().enumerate() {
            let row: Row = row.as_slice().try_into().map_err(|_| EngineError::RowWidthMismatch {
                row: y,
                expected: PLAYFIELD_WIDTH,
                actual: row.len(),
            })?;
            if let Some(x) = row.iter().position(|&v| v > 1) {
                return Err(EngineError::InvalidPixelValue { x, y, value: row[x] });
            }
            data.push(row);
        }
        Ok(data)
    }
}
