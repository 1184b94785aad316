//! Validation error tests
//!
//! Malformed arguments are rejected with a validation error and leave the
//! playfield unchanged.

use vcs_engine::{EngineError, Playfield, PlayfieldMode, RegisterMode};

#[test]
fn test_zero_height_is_rejected() {
    assert!(matches!(Playfield::new(0), Err(EngineError::InvalidHeight)));
    let mut playfield = Playfield::new(2).unwrap();
    assert!(playfield.set_height(0).unwrap_err().is_validation());
    assert_eq!(playfield.height(), 2);
}

#[test]
fn test_data_row_count_must_match_height() {
    let rows = vec![vec![0u8; 40]; 3];
    let err = Playfield::from_parts(4, PlayfieldMode::Normal, Some(rows.as_slice()), None).unwrap_err();
    assert!(matches!(err, EngineError::DataSizeMismatch { expected: 4, actual: 3 }));
    assert!(err.is_validation());
}

#[test]
fn test_huge_height_with_short_data_is_rejected() {
    let err = Playfield::from_parts(usize::MAX / 2, PlayfieldMode::Normal, Some(&[][..]), None).unwrap_err();
    assert!(matches!(err, EngineError::DataSizeMismatch { actual: 0, .. }));
}

#[test]
fn test_zero_height_with_empty_data_is_rejected() {
    let err = Playfield::from_parts(0, PlayfieldMode::Normal, Some(&[][..]), None).unwrap_err();
    assert!(matches!(err, EngineError::InvalidHeight));
}

#[test]
fn test_row_width_must_be_forty() {
    let mut rows = vec![vec![0u8; 40]; 2];
    rows[1].pop();
    let err = Playfield::from_parts(2, PlayfieldMode::Normal, Some(rows.as_slice()), None).unwrap_err();
    assert!(matches!(err, EngineError::RowWidthMismatch { row: 1, expected: 40, actual: 39 }));
}

#[test]
fn test_pixel_values_must_be_binary() {
    let mut rows = vec![vec![0u8; 40]; 2];
    rows[0][5] = 2;
    let err = Playfield::from_parts(2, PlayfieldMode::Normal, Some(rows.as_slice()), None).unwrap_err();
    assert!(matches!(err, EngineError::InvalidPixelValue { x: 5, y: 0, value: 2 }));
}

#[test]
fn test_register_list_must_have_three_entries() {
    let err = Playfield::from_parts(2, PlayfieldMode::Normal, None, Some(&[RegisterMode::Fill, RegisterMode::Fill][..])).unwrap_err();
    assert!(matches!(err, EngineError::RegisterCountMismatch { len: 2 }));
}

#[test]
fn test_set_register_modes_without_partial_mutation() {
    let mut playfield = Playfield::new(2).unwrap();
    let err = playfield
        .set_register_modes(&[RegisterMode::Fill, RegisterMode::Fill, RegisterMode::Fill, RegisterMode::Fill])
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(playfield.register_modes(), [RegisterMode::Draw; 3]);
    assert_eq!(playfield.count_set(), 0);
}

#[test]
fn test_invalid_register_index() {
    let mut playfield = Playfield::new(2).unwrap();
    let err = playfield.set_register_mode(3, RegisterMode::Fill).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRegister { register: 3 }));
    assert_eq!(playfield.count_set(), 0);
}

#[test]
fn test_set_data_rejects_and_keeps_old_data() {
    let mut playfield = Playfield::new(2).unwrap();
    playfield.set_pixel(0, 0, 1);
    assert!(playfield.set_data(&[vec![0u8; 40]]).is_err());
    assert_eq!(playfield.get_pixel(0, 0), 1);
}

#[test]
fn test_unknown_mode_names() {
    assert!(matches!("sideways".parse::<PlayfieldMode>(), Err(EngineError::UnknownPlayfieldMode { .. })));
    assert!(matches!("".parse::<RegisterMode>(), Err(EngineError::UnknownRegisterMode { .. })));
}
