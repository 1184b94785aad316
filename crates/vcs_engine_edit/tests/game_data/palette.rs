use pretty_assertions::assert_eq;
use vcs_engine::{EngineError, Playfield, PlayfieldId, PlayfieldMode};
use vcs_engine_edit::GameData;

use super::helpers::create_game_data;

#[test]
fn test_ids_are_fresh_and_monotonic() {
    let mut game_data = GameData::new();
    let a = game_data.add_playfield(4).unwrap();
    let b = game_data.add_playfield(8).unwrap();
    assert_eq!(a, PlayfieldId::new(1));
    assert_eq!(b, PlayfieldId::new(2));

    game_data.remove_playfield(b).unwrap();
    let c = game_data.add_playfield(2).unwrap();
    assert_eq!(c, PlayfieldId::new(3), "ids are never reused");
    assert_eq!(game_data.playfields().iter().map(Playfield::id).collect::<Vec<_>>(), vec![a, c]);
}

#[test]
fn test_add_rejects_zero_height() {
    let mut game_data = GameData::new();
    assert!(matches!(game_data.add_playfield(0), Err(EngineError::InvalidHeight)));
    assert!(game_data.playfields().is_empty());
}

#[test]
fn test_copy_is_independent() {
    let mut game_data = GameData::new();
    let id = game_data.add_playfield(4).unwrap();
    game_data.playfield_mut(id).unwrap().set_pixel(3, 3, 1);

    let copy = game_data.add_playfield_copy(id).unwrap();
    assert_ne!(copy, id);
    game_data.playfield_mut(copy).unwrap().set_pixel(0, 0, 1);

    assert_eq!(game_data.playfield(id).unwrap().count_set(), 2);
    assert_eq!(game_data.playfield(copy).unwrap().count_set(), 4);
    assert_eq!(game_data.playfield(copy).unwrap().id(), copy);
}

#[test]
fn test_copy_of_unknown_id_fails() {
    let mut game_data = GameData::new();
    let err = game_data.add_playfield_copy(PlayfieldId::new(42)).unwrap_err();
    assert!(matches!(err, EngineError::UnknownPlayfield { id } if id == PlayfieldId::new(42)));
}

#[test]
fn test_remove_prunes_map() {
    let (mut game_data, ids) = create_game_data(3);
    game_data.add_to_map(ids[0], Some(1)).unwrap();
    assert_eq!(game_data.map(), &[ids[0], ids[0], ids[1], ids[2]]);

    let (removed, indices) = game_data.remove_playfield(ids[0]).unwrap();
    assert_eq!(removed.id(), ids[0]);
    assert_eq!(indices, vec![1, 0]);
    assert_eq!(game_data.map(), &[ids[1], ids[2]]);
}

#[test]
fn test_replace_writes_back() {
    let (mut game_data, ids) = create_game_data(1);
    let mut edited = game_data.playfield(ids[0]).unwrap().copy();
    edited.set_mode(PlayfieldMode::Reflected);
    edited.set_pixel(1, 1, 1);
    game_data.replace_playfield(edited.clone()).unwrap();
    assert_eq!(game_data.playfield(ids[0]), Some(&edited));

    let stranger = Playfield::new(4).unwrap().with_id(PlayfieldId::new(99));
    assert!(game_data.replace_playfield(stranger).is_err());
}

#[test]
fn test_removing_selected_playfield_clears_selection() {
    let (mut game_data, ids) = create_game_data(2);
    game_data.select_map(0).unwrap();
    assert_eq!(game_data.selected_playfield(), Some(ids[0]));
    game_data.remove_playfield(ids[0]).unwrap();
    assert_eq!(game_data.selected_playfield(), None);
    assert_eq!(game_data.selected_map_idx(), None);
}

#[test]
fn test_add_fails_when_ids_are_exhausted() {
    let mut game_data: GameData = serde_json::from_str(r#"{"playfields":[],"map":[],"next_id":4294967295}"#).unwrap();
    game_data.validate().unwrap();
    assert!(matches!(game_data.add_playfield(2), Err(EngineError::IdSpaceExhausted { .. })));
    assert!(game_data.playfields().is_empty());
}
