//! Rectangle drawing algorithms

use vcs_engine::Position;

use super::{plot_points, DrawTarget};

fn bounds(p0: Position, p1: Position) -> (i32, i32, i32, i32) {
    (p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y))
}

/// The four edges of the bounding box of p0 and p1, each point once
pub fn get_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let (min_x, min_y, max_x, max_y) = bounds(p0, p1);
    let mut points = Vec::new();

    for y in min_y..=max_y {
        if y == min_y || y == max_y {
            points.extend((min_x..=max_x).map(|x| Position::new(x, y)));
        } else {
            points.push(Position::new(min_x, y));
            if max_x != min_x {
                points.push(Position::new(max_x, y));
            }
        }
    }

    points
}

/// Every point of the bounding box of p0 and p1, row by row
pub fn get_filled_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let (min_x, min_y, max_x, max_y) = bounds(p0, p1);
    (min_y..=max_y).flat_map(|y| (min_x..=max_x).map(move |x| Position::new(x, y))).collect()
}

/// Draw a rectangle outline
pub fn draw_rectangle<T: DrawTarget>(target: &mut T, p0: Position, p1: Position, value: u8) {
    plot_points(target, get_rectangle_points(p0, p1), value);
}

/// Draw a filled rectangle
pub fn fill_rectangle<T: DrawTarget>(target: &mut T, p0: Position, p1: Position, value: u8) {
    plot_points(target, get_filled_rectangle_points(p0, p1), value);
}
