use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, io::Write, path::PathBuf};
use vcs_engine_edit::DrawMode;

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "vcs_draw";

/// Lazily initialized project directories (computed once on first access)
pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Options persisted in `settings.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the `state__<name>.json` files
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Height of newly created playfields
    #[serde(default = "default_height")]
    pub default_height: usize,

    #[serde(default)]
    pub default_draw_mode: DrawMode,
}

fn default_height() -> usize {
    24
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            default_height: default_height(),
            default_draw_mode: DrawMode::default(),
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "settings.toml";

    pub fn load() -> Self {
        let Some(config_dir) = Self::config_dir() else {
            return Self::default();
        };

        let options_file = config_dir.join(Self::FILE_NAME);
        if options_file.exists() {
            match fs::read_to_string(&options_file) {
                Ok(txt) => match toml::from_str::<Settings>(&txt) {
                    Ok(settings) => return settings,
                    Err(err) => log::error!("Error parsing settings file {}: {}", options_file.display(), err),
                },
                Err(err) => log::error!("Error reading settings file: {}", err),
            }
        }

        Self::default()
    }

    /// Atomically write settings to file (write to temp, then rename).
    pub fn store(&self) -> anyhow::Result<PathBuf> {
        let Some(config_dir) = Self::config_dir() else {
            anyhow::bail!("Cannot determine config directory for saving settings");
        };
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let file_path = config_dir.join(Self::FILE_NAME);
        let temp_path = config_dir.join(format!(".{}.tmp", Self::FILE_NAME));
        let text = toml::to_string_pretty(self)?;

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result.and_then(|()| fs::rename(&temp_path, &file_path)) {
            log::error!("Error writing settings file: {}", err);
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(file_path)
    }

    /// Storage directory to use: the configured one, else `<data dir>/states`.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| PROJECT_DIRS.as_ref().map(|p| p.data_dir().join("states")))
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }
}
