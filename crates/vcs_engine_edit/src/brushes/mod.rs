//! Shape library for playfield drawing
//!
//! GUI-independent drawing primitives. The point generators are pure and can
//! be tested without a playfield; the `draw_*` functions write through the
//! [`DrawTarget`] trait so every write still goes through the playfield's
//! mirror and register filter.
//!
//! # Features
//! - Line drawing (Bresenham algorithm)
//! - Rectangle outline and fill
//! - Ellipse outline and fill (midpoint algorithm)
//! - One stroke strategy per [`DrawMode`]
//!
//! # Example
//! ```ignore
//! use vcs_engine::{Playfield, Position};
//! use vcs_engine_edit::brushes::line::draw_line;
//!
//! let mut playfield = Playfield::new(8)?;
//! draw_line(&mut playfield, Position::new(0, 0), Position::new(10, 5), 1);
//! ```

mod draw_mode;
pub mod ellipse;
pub mod line;
mod rasterizer;
pub mod rectangle;

pub use draw_mode::DrawMode;
pub use rasterizer::{EllipseBrush, LineBrush, RectangleBrush, ScribbleBrush, ShapeRasterizer};

use vcs_engine::{Playfield, Position};

/// A trait for targets that can be drawn on
///
/// This abstraction allows the shape algorithms to work with
/// any grid-like structure without depending on specific types.
pub trait DrawTarget {
    /// Get the width of the drawable area
    fn width(&self) -> i32;

    /// Get the height of the drawable area
    fn height(&self) -> i32;

    /// Get the value at a position
    fn pixel_at(&self, pos: Position) -> u8;

    /// Set the value at a position
    fn set_pixel_at(&mut self, pos: Position, value: u8);

    /// Check if a position is within bounds
    fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }
}

impl DrawTarget for Playfield {
    fn width(&self) -> i32 {
        Playfield::width(self) as i32
    }

    fn height(&self) -> i32 {
        Playfield::height(self) as i32
    }

    fn pixel_at(&self, pos: Position) -> u8 {
        self.get_pixel(pos.x, pos.y)
    }

    fn set_pixel_at(&mut self, pos: Position, value: u8) {
        self.set_pixel(pos.x, pos.y, value);
    }
}

/// Plot a single point, dropping points outside the target
pub fn plot_point<T: DrawTarget>(target: &mut T, pos: Position, value: u8) {
    if !target.is_valid(pos) {
        return;
    }
    target.set_pixel_at(pos, value);
}

/// Plot every point of a generated shape
pub fn plot_points<T: DrawTarget>(target: &mut T, points: impl IntoIterator<Item = Position>, value: u8) {
    for pos in points {
        plot_point(target, pos, value);
    }
}
