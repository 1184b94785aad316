//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two points.

use vcs_engine::Position;

use super::{plot_points, DrawTarget};

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
///
/// The result is 8-connected, starts at `p0` and ends at `p1`.
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::new();

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Draw a line from p0 to p1
pub fn draw_line<T: DrawTarget>(target: &mut T, p0: Position, p1: Position, value: u8) {
    plot_points(target, get_line_points(p0, p1), value);
}
