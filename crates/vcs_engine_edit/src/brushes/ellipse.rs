//! Ellipse drawing algorithms
//!
//! Integer midpoint traversal of one quadrant, mirrored four ways. The start
//! point of a stroke is the center and the distance to the current point
//! gives the two semi-axes.

use vcs_engine::Position;

use super::{plot_points, DrawTarget};

/// Walk one quadrant of an axis aligned ellipse with semi-axes `a` and `b`.
///
/// `step(dx, dy)` receives non-negative offsets from the center, starting at
/// the top of the quadrant. Region 1 steps along x while the slope is
/// shallow, region 2 steps along y down to the horizontal axis. Flat
/// ellipses reach `dy == 0` before `dx == a`; the tail completes the cap
/// along the axis.
fn trace_quadrant(a: i32, b: i32, mut step: impl FnMut(i32, i32)) {
    let (a, b) = (i64::from(a.unsigned_abs()), i64::from(b.unsigned_abs()));
    if a == 0 {
        for y in (0..=b).rev() {
            step(0, y as i32);
        }
        return;
    }

    let rx2 = a * a;
    let ry2 = b * b;
    let two_rx2 = 2 * rx2;
    let two_ry2 = 2 * ry2;

    let mut x = 0i64;
    let mut y = b;
    let mut px = 0i64;
    let mut py = two_rx2 * y;
    step(0, y as i32);

    // Region 1: |slope| < 1
    let mut p = ry2 - rx2 * b + rx2 / 4;
    while px < py {
        x += 1;
        px += two_ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= two_rx2;
            p += ry2 + px - py;
        }
        step(x as i32, y as i32);
    }

    // Region 2: |slope| >= 1
    p = ry2 * (2 * x + 1).pow(2) / 4 + rx2 * (y - 1).pow(2) - rx2 * ry2;
    while y > 0 {
        y -= 1;
        py -= two_rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += two_ry2;
            p += rx2 - py + px;
        }
        step(x as i32, y as i32);
    }

    while x < a {
        x += 1;
        step(x as i32, 0);
    }
}

/// Outline points of the ellipse centered at `center`, each point once
pub fn get_ellipse_points(center: Position, radius_x: i32, radius_y: i32) -> Vec<Position> {
    let mut points = Vec::new();
    trace_quadrant(radius_x, radius_y, |dx, dy| {
        for pos in [
            Position::new(center.x + dx, center.y + dy),
            Position::new(center.x - dx, center.y + dy),
            Position::new(center.x - dx, center.y - dy),
            Position::new(center.x + dx, center.y - dy),
        ] {
            if !points.contains(&pos) {
                points.push(pos);
            }
        }
    });
    points
}

/// Every point inside the ellipse centered at `center`
///
/// Each traversal step fills the span between the symmetric x extents on
/// the upper and the lower row. Rows visited several times in region 1 keep
/// their widest span, so the caps come out as full scanlines.
pub fn get_filled_ellipse_points(center: Position, radius_x: i32, radius_y: i32) -> Vec<Position> {
    let mut spans: Vec<(i32, i32)> = Vec::new();
    trace_quadrant(radius_x, radius_y, |dx, dy| {
        for y in [center.y - dy, center.y + dy] {
            match spans.iter_mut().find(|(row, _)| *row == y) {
                Some(span) => span.1 = span.1.max(dx),
                None => spans.push((y, dx)),
            }
        }
    });
    spans.sort_unstable();
    spans
        .into_iter()
        .flat_map(|(y, dx)| (center.x - dx..=center.x + dx).map(move |x| Position::new(x, y)))
        .collect()
}

/// Draw an ellipse outline around `center` touching `edge`'s column and row
pub fn draw_ellipse<T: DrawTarget>(target: &mut T, center: Position, edge: Position, value: u8) {
    let radius = edge - center;
    plot_points(target, get_ellipse_points(center, radius.x, radius.y), value);
}

/// Draw a filled ellipse around `center` touching `edge`'s column and row
pub fn fill_ellipse<T: DrawTarget>(target: &mut T, center: Position, edge: Position, value: u8) {
    let radius = edge - center;
    plot_points(target, get_filled_ellipse_points(center, radius.x, radius.y), value);
}
