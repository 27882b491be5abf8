//! External configuration loader.
//!
//! Reads `config.toml` from the executable's directory (or CWD).
//! Falls back to defaults if the file is missing or incomplete.

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

// ── Difficulty ──

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Cells per side.
    pub fn size(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
            Difficulty::Extreme => 20,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Extreme => 3,
        }
    }

    /// Unknown indices fall back to `Easy`.
    pub fn from_index(i: usize) -> Difficulty {
        Difficulty::ALL.get(i).copied().unwrap_or_default()
    }
}

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazewalkConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    /// Explicit side length; overrides `difficulty` when set.
    pub size: Option<usize>,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_path: bool,
    pub color: bool,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    maze: TomlMaze,
    #[serde(default)]
    display: TomlDisplay,
}

#[derive(Deserialize, Debug, Default)]
struct TomlMaze {
    #[serde(default)]
    difficulty: Difficulty,
    seed: Option<u64>,
    size: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct TomlDisplay {
    #[serde(default = "default_show_path")]
    show_path: bool,
    #[serde(default = "default_color")]
    color: bool,
}

// ── Defaults ──

fn default_show_path() -> bool { true }
fn default_color() -> bool { true }

impl Default for TomlDisplay {
    fn default() -> Self {
        TomlDisplay {
            show_path: default_show_path(),
            color: default_color(),
        }
    }
}

impl From<TomlConfig> for MazewalkConfig {
    fn from(t: TomlConfig) -> Self {
        MazewalkConfig {
            difficulty: t.maze.difficulty,
            seed: t.maze.seed,
            size: t.maze.size,
            display: DisplayConfig {
                show_path: t.display.show_path,
                color: t.display.color,
            },
        }
    }
}

impl Default for MazewalkConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl MazewalkConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys fall back to defaults.
    pub fn load() -> Self {
        load_toml(&candidate_dirs()).into()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TomlConfig>(text).map(Into::into)
    }

    /// Side length of the maze to build.
    pub fn maze_size(&self) -> usize {
        self.size.unwrap_or_else(|| self.difficulty.size())
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                Ok(cfg) => {
                    info!("loaded {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    warn!("config.toml parse error: {e}; using default settings");
                    return TomlConfig::default();
                }
            },
            Err(e) => warn!("could not read {}: {e}", path.display()),
        }
    }
    TomlConfig::default()
}
