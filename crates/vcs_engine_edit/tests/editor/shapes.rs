//! Shape modes: preview from the pre-stroke snapshot

use pretty_assertions::assert_eq;
use vcs_engine::{Playfield, PlayfieldMode, Position};
use vcs_engine_edit::brushes::{ellipse, line, DrawMode};

use super::helpers::*;

#[test]
fn test_line_matches_bresenham_reference() {
    let (mut session, _rx) = create_session_with_mode(4, DrawMode::Line);
    stroke(&mut session, &[(0, 0), (3, 2)]);

    let expected = expected_grid(4, PlayfieldMode::Normal, &[(0, 0), (1, 1), (2, 1), (3, 2)]);
    assert_eq!(session.playfield().data(), expected);
}

#[test]
fn test_filled_rect_preview_leaves_no_residue() {
    let (mut session, _rx) = create_session_with_mode(8, DrawMode::FilledRect);
    stroke(&mut session, &[(5, 5), (2, 2), (1, 1)]);
    assert_eq!(session.playfield().data(), expected_grid(8, PlayfieldMode::Normal, &rect_cells(1, 1, 5, 5)));
}

#[test]
fn test_shrinking_rect_clears_previous_preview() {
    let (mut session, _rx) = create_session_with_mode(8, DrawMode::FilledRect);
    stroke(&mut session, &[(1, 1), (5, 5), (2, 2)]);
    assert_eq!(session.playfield().data(), expected_grid(8, PlayfieldMode::Normal, &rect_cells(1, 1, 2, 2)));
}

#[test]
fn test_preview_keeps_pre_stroke_content() {
    let (mut session, _rx) = create_session(8);
    stroke(&mut session, &[(10, 0)]);

    session.set_draw_mode(DrawMode::Rect).unwrap();
    stroke(&mut session, &[(0, 2), (6, 6), (3, 4)]);

    let mut cells = vec![(10, 0)];
    cells.extend([(0, 2), (1, 2), (2, 2), (3, 2), (0, 3), (3, 3), (0, 4), (1, 4), (2, 4), (3, 4)]);
    assert_eq!(session.playfield().data(), expected_grid(8, PlayfieldMode::Normal, &cells));
}

#[test]
fn test_repeated_preview_is_idempotent() {
    for mode in DrawMode::ALL.into_iter().filter(|m| m.needs_snapshot()) {
        let (mut session, _rx) = create_session_with_mode(10, mode);
        down(&mut session, 6, 4);
        drag(&mut session, 9, 8);
        let once = session.playfield().data();
        drag(&mut session, 2, 1);
        drag(&mut session, 9, 8);
        assert_eq!(session.playfield().data(), once, "{mode} preview not idempotent");
        session.pointer_up();
    }
}

#[test]
fn test_erasing_line_only_touches_line() {
    let (mut session, _rx) = create_session(4);
    session.set_draw_mode(DrawMode::FilledRect).unwrap();
    stroke(&mut session, &[(0, 0), (5, 3)]);

    session.set_draw_mode(DrawMode::Line).unwrap();
    erase_down(&mut session, 0, 1);
    drag(&mut session, 5, 1);
    session.pointer_up();

    let mut cells = super::helpers::rect_cells(0, 0, 5, 3);
    cells.retain(|&(_, y)| y != 1);
    assert_eq!(session.playfield().data(), expected_grid(4, PlayfieldMode::Normal, &cells));
}

#[test]
fn test_ellipse_is_centered_on_stroke_start() {
    let (mut session, _rx) = create_session_with_mode(12, DrawMode::Ellipse);
    stroke(&mut session, &[(10, 6), (14, 9)]);

    let mut reference = Playfield::new(12).unwrap();
    for p in ellipse::get_ellipse_points(Position::new(10, 6), 4, 3) {
        reference.set_pixel(p.x, p.y, 1);
    }
    assert_eq!(session.playfield().data(), reference.data());
    assert_eq!(session.playfield().get_pixel(10, 6), 0);
}

#[test]
fn test_filled_ellipse_contains_center() {
    let (mut session, _rx) = create_session_with_mode(12, DrawMode::FilledEllipse);
    stroke(&mut session, &[(10, 6), (14, 9)]);
    let playfield = session.playfield();
    assert_eq!(playfield.get_pixel(10, 6), 1);
    assert_eq!(playfield.get_pixel(14, 6), 1);
    assert_eq!(playfield.get_pixel(10, 9), 1);
    assert_eq!(playfield.get_pixel(15, 6), 0);
}

#[test]
fn test_shapes_are_clipped_at_the_edge() {
    let (mut session, _rx) = create_session_with_mode(4, DrawMode::Line);
    stroke(&mut session, &[(18, 1), (45, 1)]);
    // columns 18..=39 drawn directly, their mirrors cover 0..=19
    let playfield = session.playfield();
    assert_eq!(playfield.get_pixel(39, 1), 1);
    assert_eq!(playfield.get_pixel(0, 1), 1);
    assert_eq!(playfield.count_set(), 40);
}

#[test]
fn test_reflected_line_is_mirrored() {
    let (mut session, _rx) = create_session_with_mode(4, DrawMode::Line);
    session.set_playfield_mode(PlayfieldMode::Reflected).unwrap();
    stroke(&mut session, &[(0, 0), (3, 2)]);

    let cells: Vec<(usize, usize)> = line::get_line_points(Position::new(0, 0), Position::new(3, 2))
        .into_iter()
        .map(|p| (p.x as usize, p.y as usize))
        .collect();
    assert_eq!(session.playfield().data(), expected_grid(4, PlayfieldMode::Reflected, &cells));
}
