//! Named game data states on disk.
//!
//! Each state is one pretty printed JSON file `state__<name>.json` in the
//! storage directory.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use vcs_engine::{EngineError, Result};

use crate::{EditorEvent, GameData};

const STATE_PREFIX: &str = "state__";
const STATE_SUFFIX: &str = ".json";

pub struct StateStorage {
    dir: PathBuf,
}

impl StateStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state_path(&self, name: &str) -> Result<PathBuf> {
        check_name(name)?;
        Ok(self.dir.join(format!("{STATE_PREFIX}{name}{STATE_SUFFIX}")))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.state_path(name).is_ok_and(|path| path.is_file())
    }

    /// Write `game_data` under `name`, replacing an existing state.
    ///
    /// The file is written to a temporary file first and renamed into place.
    pub fn save(&self, name: &str, game_data: &GameData) -> Result<EditorEvent> {
        let path = self.state_path(name)?;
        let text = serde_json::to_string_pretty(game_data).map_err(EngineError::serialization)?;
        fs::create_dir_all(&self.dir)?;

        let temp_path = self.dir.join(format!(".{STATE_PREFIX}{name}{STATE_SUFFIX}.tmp"));
        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result.and_then(|()| fs::rename(&temp_path, &path)) {
            log::error!("Error writing state {name}: {err}");
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        log::info!("saved state {name} to {}", path.display());
        Ok(EditorEvent::StateSaved { name: name.to_string() })
    }

    /// Read the state stored under `name`; `None` if there is none.
    pub fn load(&self, name: &str) -> Result<Option<GameData>> {
        let path = self.state_path(name)?;
        if !path.is_file() {
            log::info!("state {name} not found in {}", self.dir.display());
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let game_data: GameData = serde_json::from_str(&text).map_err(EngineError::serialization)?;
        game_data.validate()?;
        log::info!("loaded state {name} from {}", path.display());
        Ok(Some(game_data))
    }

    /// Load `name` and describe it the same way a command result is described
    pub fn load_with_event(&self, name: &str) -> Result<Option<(GameData, EditorEvent)>> {
        Ok(self.load(name)?.map(|data| (data, EditorEvent::StateLoaded { name: name.to_string() })))
    }

    /// Names of all saved states, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let file_name = entry?.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_prefix(STATE_PREFIX).and_then(|n| n.strip_suffix(STATE_SUFFIX)) {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete a saved state. Returns `false` when it didn't exist.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.state_path(name)?;
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        log::info!("deleted state {name}");
        Ok(true)
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EngineError::validation("state name must not be empty"));
    }
    if name.chars().any(|c| std::path::is_separator(c) || c.is_control()) || name == "." || name == ".." {
        return Err(EngineError::validation(format!("invalid state name {name:?}")));
    }
    Ok(())
}
