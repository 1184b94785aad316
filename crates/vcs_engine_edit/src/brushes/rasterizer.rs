//! Stroke strategies, one per [`super::DrawMode`].

use vcs_engine::{Playfield, Position};

use super::{ellipse, line, plot_point, rectangle};

/// How a draw mode turns pointer input into playfield writes
pub trait ShapeRasterizer: Sync {
    /// First cell of a stroke. Every mode starts with a single pixel.
    fn on_stroke_start(&self, live: &mut Playfield, pos: Position, value: u8) {
        plot_point(live, pos, value);
    }

    /// The pointer entered a new cell.
    ///
    /// `snapshot` is the playfield as it was before the stroke started. Shape
    /// modes reset `live` to it and draw the whole shape again, so calling
    /// this twice with the same arguments gives the same result.
    fn on_stroke_move(&self, snapshot: Option<&Playfield>, start: Position, live: &mut Playfield, current: Position, value: u8);
}

/// Reset the live bitmap to the pre-stroke snapshot
fn restore_snapshot(snapshot: Option<&Playfield>, live: &mut Playfield) {
    let Some(snapshot) = snapshot else {
        log::warn!("shape preview on playfield {} without snapshot", live.id());
        return;
    };
    if let Err(err) = live.restore_data_from(snapshot) {
        log::warn!("can't restore stroke snapshot: {err}");
    }
}

/// Freehand drawing
pub struct ScribbleBrush;

impl ShapeRasterizer for ScribbleBrush {
    fn on_stroke_move(&self, _snapshot: Option<&Playfield>, _start: Position, live: &mut Playfield, current: Position, value: u8) {
        plot_point(live, current, value);
    }
}

pub struct LineBrush;

impl ShapeRasterizer for LineBrush {
    fn on_stroke_move(&self, snapshot: Option<&Playfield>, start: Position, live: &mut Playfield, current: Position, value: u8) {
        restore_snapshot(snapshot, live);
        line::draw_line(live, start, current, value);
    }
}

pub struct RectangleBrush {
    pub filled: bool,
}

impl ShapeRasterizer for RectangleBrush {
    fn on_stroke_move(&self, snapshot: Option<&Playfield>, start: Position, live: &mut Playfield, current: Position, value: u8) {
        restore_snapshot(snapshot, live);
        if self.filled {
            rectangle::fill_rectangle(live, start, current, value);
        } else {
            rectangle::draw_rectangle(live, start, current, value);
        }
    }
}

pub struct EllipseBrush {
    pub filled: bool,
}

impl ShapeRasterizer for EllipseBrush {
    fn on_stroke_move(&self, snapshot: Option<&Playfield>, start: Position, live: &mut Playfield, current: Position, value: u8) {
        restore_snapshot(snapshot, live);
        if self.filled {
            ellipse::fill_ellipse(live, start, current, value);
        } else {
            ellipse::draw_ellipse(live, start, current, value);
        }
    }
}
