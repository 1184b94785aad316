//! Saved state format tests

use pretty_assertions::assert_eq;
use vcs_engine::{Playfield, PlayfieldId, PlayfieldMode, RegisterMode};

#[test]
fn test_json_keeps_state() {
    let mut playfield = Playfield::new(3).unwrap().with_id(PlayfieldId::new(7));
    playfield.set_mode(PlayfieldMode::Reflected);
    playfield.set_register_mode(0, RegisterMode::Clear).unwrap();
    playfield.set_pixel(10, 1, 1);

    let json = serde_json::to_string(&playfield).unwrap();
    let loaded: Playfield = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, playfield);
    assert_eq!(loaded.id(), PlayfieldId::new(7));
}

#[test]
fn test_json_register_names() {
    let playfield = Playfield::new(1).unwrap();
    let json = serde_json::to_value(&playfield).unwrap();
    assert_eq!(json["register_modes"], serde_json::json!(["DRAW", "DRAW", "DRAW"]));
    assert_eq!(json["mode"], serde_json::json!("normal"));
}

#[test]
fn test_loading_validates_shape() {
    let json = r#"{ "id": 1, "height": 2, "data": [[0]] }"#;
    assert!(serde_json::from_str::<Playfield>(json).is_err());

    let json = r#"{ "id": 1, "height": 1, "register_modes": ["DRAW"], "data": [[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]] }"#;
    assert!(serde_json::from_str::<Playfield>(json).is_err());
}

#[test]
fn test_loading_applies_invariant() {
    let mut row = vec![0u8; 40];
    row[2] = 1;
    let json = serde_json::json!({ "id": 4, "height": 1, "mode": "normal", "register_modes": ["DRAW", "DRAW", "DRAW"], "data": [row] });
    let loaded: Playfield = serde_json::from_value(json).unwrap();
    assert_eq!(loaded.get_pixel(22, 0), 1);
}
