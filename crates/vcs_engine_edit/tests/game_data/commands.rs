use pretty_assertions::assert_eq;
use vcs_engine::{EngineError, PlayfieldId, PlayfieldMode, RegisterMode};
use vcs_engine_edit::{EditorCommand, EditorEvent, GameData};

use super::helpers::create_game_data;

#[test]
fn test_add_playfield_command() {
    let mut game_data = GameData::new();
    let events = game_data.execute(EditorCommand::AddPlayfield { height: 6, copy_of: None }).unwrap();
    assert_eq!(events, vec![EditorEvent::PlayfieldAdded { id: PlayfieldId::new(1) }]);

    let events = game_data
        .execute(EditorCommand::AddPlayfield {
            height: 0,
            copy_of: Some(PlayfieldId::new(1)),
        })
        .unwrap();
    assert_eq!(events, vec![EditorEvent::PlayfieldAdded { id: PlayfieldId::new(2) }]);
    assert_eq!(game_data.playfield(PlayfieldId::new(2)).unwrap().height(), 6);
}

#[test]
fn test_map_commands() {
    let (mut game_data, ids) = create_game_data(2);
    let events = game_data.execute(EditorCommand::AddToMap { id: ids[1], idx: Some(0) }).unwrap();
    assert_eq!(events, vec![EditorEvent::MapAdded { id: ids[1], idx: 0 }]);

    let events = game_data.execute(EditorCommand::MoveMap { from_idx: 0, to_idx: 2 }).unwrap();
    assert_eq!(events, vec![EditorEvent::MapMoved { from_idx: 0, to_idx: 2 }]);

    let events = game_data.execute(EditorCommand::DeleteFromMap { idx: 2 }).unwrap();
    assert_eq!(events, vec![EditorEvent::MapDeleted { idx: 2 }]);
    assert_eq!(game_data.map(), &ids[..]);

    let events = game_data.execute(EditorCommand::SelectMap { idx: 1 }).unwrap();
    assert_eq!(events, vec![EditorEvent::MapSelected { idx: 1 }, EditorEvent::PlayfieldSelected { id: ids[1] }]);
}

#[test]
fn test_change_data_command() {
    let (mut game_data, ids) = create_game_data(1);
    let mut data = vec![vec![0u8; 40]; 4];
    data[0][0] = 1;
    let events = game_data.execute(EditorCommand::ChangePlayfieldData { id: ids[0], data }).unwrap();

    let EditorEvent::PlayfieldDataChanged { id, data } = &events[0] else {
        panic!("unexpected event {events:?}");
    };
    assert_eq!(*id, ids[0]);
    assert_eq!(data[0][20], 1, "event carries the mirrored data");
}

#[test]
fn test_change_state_command() {
    let (mut game_data, ids) = create_game_data(1);
    let events = game_data
        .execute(EditorCommand::ChangePlayfieldState {
            id: ids[0],
            mode: PlayfieldMode::Reflected,
            register_modes: vec![RegisterMode::Fill, RegisterMode::Draw, RegisterMode::Clear],
        })
        .unwrap();
    assert_eq!(events.len(), 2);
    let playfield = game_data.playfield(ids[0]).unwrap();
    assert_eq!(playfield.mode(), PlayfieldMode::Reflected);
    assert_eq!(playfield.get_pixel(0, 3), 1);
    assert_eq!(playfield.get_pixel(39, 3), 1);
}

#[test]
fn test_failing_command_changes_nothing() {
    let (mut game_data, ids) = create_game_data(1);
    let before = game_data.clone();

    let err = game_data
        .execute(EditorCommand::ChangePlayfieldState {
            id: ids[0],
            mode: PlayfieldMode::Reflected,
            register_modes: vec![RegisterMode::Fill],
        })
        .unwrap_err();
    assert!(matches!(err, EngineError::RegisterCountMismatch { len: 1 }));

    let err = game_data
        .execute(EditorCommand::ChangePlayfieldData {
            id: ids[0],
            data: vec![vec![0u8; 40]; 3],
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert!(game_data.execute(EditorCommand::DeletePlayfield { id: PlayfieldId::new(9) }).is_err());
    assert!(game_data.execute(EditorCommand::SelectPlayfield { id: PlayfieldId::new(9) }).is_err());
    assert_eq!(game_data, before);
}

#[test]
fn test_delete_playfield_reports_map_entries() {
    let (mut game_data, ids) = create_game_data(2);
    game_data.add_to_map(ids[0], None).unwrap();
    let events = game_data.execute(EditorCommand::DeletePlayfield { id: ids[0] }).unwrap();
    assert_eq!(
        events,
        vec![
            EditorEvent::MapDeleted { idx: 2 },
            EditorEvent::MapDeleted { idx: 0 },
            EditorEvent::PlayfieldDeleted { id: ids[0] },
        ]
    );
}

#[test]
fn test_set_state_command() {
    let (mut game_data, _) = create_game_data(1);
    let (replacement, ids) = create_game_data(3);
    let events = game_data
        .execute(EditorCommand::SetState {
            state: Box::new(replacement.clone()),
        })
        .unwrap();
    assert_eq!(events, vec![EditorEvent::StateSet]);
    assert_eq!(game_data, replacement);
    assert_eq!(game_data.map(), &ids[..]);
}
