//! Persisted launcher settings stored as a flat `Key=Value` text file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const KEY_FOLDER: &str = "Folder";
const KEY_DARK_THEME: &str = "DarkTheme";
const KEY_SHOW_IN_TASKBAR: &str = "ShowInTaskbar";

/// User settings for the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder searched by the matcher
    pub folder: Option<PathBuf>,
    /// Use the dark palette
    pub dark_theme: bool,
    /// Show the window in the taskbar
    pub show_in_taskbar: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder: None,
            dark_theme: true,
            show_in_taskbar: true,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl Settings {
    /// Get the settings file path
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "quicklaunch", "quicklaunch")
            .context("Failed to determine config directory")?;
        Ok(dirs.config_dir().join("config.txt"))
    }

    /// Parse settings text. Unknown keys and lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::default();

        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                KEY_FOLDER => {
                    settings.folder = if value.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(value))
                    };
                }
                KEY_DARK_THEME => settings.dark_theme = parse_bool(value),
                KEY_SHOW_IN_TASKBAR => settings.show_in_taskbar = parse_bool(value),
                other => log::debug!("Ignoring unknown settings key {:?}", other),
            }
        }

        settings
    }

    /// Render settings in the on-disk format.
    ///
    /// Fails for a folder that is not valid UTF-8 rather than writing a
    /// mangled path that would reload as a different folder.
    pub fn to_file_string(&self) -> Result<String> {
        let folder = match self.folder.as_deref() {
            Some(path) => path
                .to_str()
                .with_context(|| format!("Folder {:?} is not valid UTF-8", path))?,
            None => "",
        };

        Ok(format!(
            "{KEY_FOLDER}={folder}\n{KEY_DARK_THEME}={}\n{KEY_SHOW_IN_TASKBAR}={}\n",
            self.dark_theme, self.show_in_taskbar
        ))
    }

    /// Load settings, falling back to defaults when the file is absent or unreadable
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                if path.exists() {
                    log::warn!("Failed to read settings from {:?}: {}", path, e);
                }
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(path, self.to_file_string()?)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    pub fn with_folder(&self, folder: PathBuf) -> Self {
        Self {
            folder: Some(folder),
            ..self.clone()
        }
    }

    pub fn with_dark_theme(&self, dark_theme: bool) -> Self {
        Self {
            dark_theme,
            ..self.clone()
        }
    }

    pub fn with_show_in_taskbar(&self, show_in_taskbar: bool) -> Self {
        Self {
            show_in_taskbar,
            ..self.clone()
        }
    }
}

/// Owns the current settings value and the file it is persisted to
pub struct SettingsStore {
    path: PathBuf,
    current: Settings,
}

impl SettingsStore {
    /// Load the store from `path`
    pub fn open(path: PathBuf) -> Self {
        let current = Settings::load_from(&path);
        Self { path, current }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Replace the settings with `f(current)` and rewrite the file.
    ///
    /// A failed write keeps the new value in memory for the rest of the session.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&Settings) -> Settings,
    {
        self.current = f(&self.current);
        if let Err(e) = self.current.save_to(&self.path) {
            log::warn!("Settings not persisted: {:#}", e);
        }
    }
}
