//! Subcommand implementations. Every mutating subcommand loads the named
//! state, applies one change and saves it again.

use anyhow::{bail, Context, Result};
use vcs_engine::{PlayfieldId, Position};
use vcs_engine_edit::{AsmExporter, CellSize, DrawMode, EditorCommand, EditorEvent, EditorSession, GameData, PointerButtons, StateStorage};

use crate::{render, Args, Command, MapAction, Settings};

pub fn run(args: Args, settings: &Settings) -> Result<()> {
    let storage_dir = args
        .storage_dir
        .or_else(|| settings.storage_dir())
        .context("no storage directory configured, pass --storage-dir")?;
    let storage = StateStorage::new(storage_dir);
    log::debug!("using storage {}", storage.dir().display());

    match args.command {
        Command::New { name, height, force } => {
            if storage.exists(&name) && !force {
                bail!("state {name:?} already exists, use --force to replace it");
            }
            let mut game_data = GameData::new();
            let id = game_data.add_playfield(height.unwrap_or(settings.default_height))?;
            game_data.add_to_map(id, None)?;
            game_data.select_map(0)?;
            save(&storage, &name, &game_data)?;
        }
        Command::List => {
            for name in storage.list()? {
                println!("{name}");
            }
        }
        Command::Show { name, id } => {
            let game_data = load(&storage, &name)?;
            match id {
                Some(id) => {
                    let playfield = game_data.playfield(PlayfieldId::new(id)).with_context(|| format!("no playfield #{id} in {name:?}"))?;
                    println!("{}", render::describe_playfield(playfield));
                    print!("{}", render::render_playfield(playfield));
                }
                None => {
                    print!("{}", render::describe_game_data(&game_data));
                    for playfield in game_data.playfields() {
                        println!();
                        println!("{}", playfield.id());
                        print!("{}", render::render_playfield(playfield));
                    }
                }
            }
        }
        Command::Export { name, id, registers } => {
            let game_data = load(&storage, &name)?;
            let playfield = game_data.playfield(PlayfieldId::new(id)).with_context(|| format!("no playfield #{id} in {name:?}"))?;
            if let Some(invalid) = registers.iter().find(|&&r| r >= vcs_engine::REGISTER_COUNT) {
                bail!("invalid register {invalid}, expected 0, 1 or 2");
            }
            let mut exporter = AsmExporter::new();
            for register in 0..vcs_engine::REGISTER_COUNT {
                exporter.set_include_register(register, registers.contains(&register))?;
            }
            print!("{}", exporter.export(playfield));
        }
        Command::Draw { name, id, mode, erase, points } => {
            let mode = mode.unwrap_or(settings.default_draw_mode);
            draw(&storage, &name, PlayfieldId::new(id), mode, erase, &points)?;
        }
        Command::Add { name, height } => {
            let height = height.unwrap_or(settings.default_height);
            execute(&storage, &name, EditorCommand::AddPlayfield { height, copy_of: None })?;
        }
        Command::Copy { name, id } => {
            let command = EditorCommand::AddPlayfield {
                height: settings.default_height,
                copy_of: Some(PlayfieldId::new(id)),
            };
            execute(&storage, &name, command)?;
        }
        Command::Delete { name, id } => {
            execute(&storage, &name, EditorCommand::DeletePlayfield { id: PlayfieldId::new(id) })?;
        }
        Command::Map { name, action } => {
            let command = match action {
                MapAction::Add { id, at } => EditorCommand::AddToMap {
                    id: PlayfieldId::new(id),
                    idx: at,
                },
                MapAction::Remove { idx } => EditorCommand::DeleteFromMap { idx },
                MapAction::Move { from, to } => EditorCommand::MoveMap { from_idx: from, to_idx: to },
            };
            execute(&storage, &name, command)?;
        }
        Command::SetMode { name, id, mode } => {
            let id = PlayfieldId::new(id);
            let game_data = load(&storage, &name)?;
            let playfield = game_data.playfield(id).with_context(|| format!("no playfield {id} in {name:?}"))?;
            let command = EditorCommand::ChangePlayfieldState {
                id,
                mode,
                register_modes: playfield.register_modes().to_vec(),
            };
            execute_on(&storage, &name, game_data, command)?;
        }
        Command::SetRegister { name, id, register, mode } => {
            let id = PlayfieldId::new(id);
            let game_data = load(&storage, &name)?;
            let playfield = game_data.playfield(id).with_context(|| format!("no playfield {id} in {name:?}"))?;
            let mut register_modes = playfield.register_modes().to_vec();
            let Some(slot) = register_modes.get_mut(register) else {
                bail!("invalid register {register}, expected 0, 1 or 2");
            };
            *slot = mode;
            let command = EditorCommand::ChangePlayfieldState {
                id,
                mode: playfield.mode(),
                register_modes,
            };
            execute_on(&storage, &name, game_data, command)?;
        }
        Command::Remove { name } => {
            if !storage.delete(&name)? {
                bail!("state {name:?} not found");
            }
            println!("removed state {name}");
        }
        Command::Config { write } => {
            match Settings::config_file() {
                Some(path) => println!("settings file: {}", path.display()),
                None => println!("settings file: <no config directory>"),
            }
            println!("storage dir:   {}", storage.dir().display());
            println!("height:        {}", settings.default_height);
            println!("draw mode:     {}", settings.default_draw_mode);
            if write {
                let path = settings.store()?;
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn load(storage: &StateStorage, name: &str) -> Result<GameData> {
    let (game_data, event) = storage.load_with_event(name)?.with_context(|| format!("state {name:?} not found"))?;
    log::info!("{}", render::describe_event(&event));
    Ok(game_data)
}

fn save(storage: &StateStorage, name: &str, game_data: &GameData) -> Result<()> {
    let event = storage.save(name, game_data)?;
    println!("{}", render::describe_event(&event));
    Ok(())
}

fn execute(storage: &StateStorage, name: &str, command: EditorCommand) -> Result<()> {
    let game_data = load(storage, name)?;
    execute_on(storage, name, game_data, command)
}

fn execute_on(storage: &StateStorage, name: &str, mut game_data: GameData, command: EditorCommand) -> Result<()> {
    let events = game_data.execute(command)?;
    report(&events);
    save(storage, name, &game_data)
}

fn report(events: &[EditorEvent]) {
    for event in events {
        println!("{}", render::describe_event(event));
    }
}

/// Replay a pointer stroke through the given cells
fn draw(storage: &StateStorage, name: &str, id: PlayfieldId, mode: DrawMode, erase: bool, points: &[Position]) -> Result<()> {
    let mut game_data = load(storage, name)?;
    let playfield = game_data.playfield(id).with_context(|| format!("no playfield {id} in {name:?}"))?.copy();
    let Some((first, rest)) = points.split_first() else {
        bail!("a stroke needs at least one point");
    };

    // one device unit per cell, pointer at the cell center
    let (mut session, events) = EditorSession::new(playfield, CellSize::new(1.0, 1.0));
    session.set_draw_mode(mode)?;
    let buttons = if erase { PointerButtons::SECONDARY } else { PointerButtons::PRIMARY };
    let center = |p: &Position| (f64::from(p.x) + 0.5, f64::from(p.y) + 0.5);

    let (x, y) = center(first);
    session.pointer_down(x, y, buttons);
    for point in rest {
        let (x, y) = center(point);
        session.pointer_move(x, y, buttons);
    }
    session.pointer_up();

    let (playfield, _) = session.into_parts();
    print!("{}", render::render_playfield(&playfield));
    game_data.replace_playfield(playfield)?;
    report(&events.try_iter().collect::<Vec<_>>());
    save(storage, name, &game_data)
}
