use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::grid::Grid;
use crate::snake::Position;

/// Default virtual canvas edge length.
pub const DEFAULT_CANVAS_SIZE: u16 = 400;

/// Default tile edge length on the canvas.
pub const DEFAULT_TILE_SIZE: u16 = 20;

/// Tile every new run starts on.
pub const START_POSITION: Position = Position { x: 5, y: 5 };

/// Ticks per second at the start of a run.
pub const BASE_SPEED: u32 = 6;

/// Speed ceiling; further increases are skipped silently.
pub const MAX_SPEED: u32 = 12;

/// Score awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score step that triggers one speed increase.
pub const POINTS_PER_SPEED_STEP: u32 = 50;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("tile size must be greater than zero")]
    InvalidTileSize,
    #[error("a {canvas_size}px canvas with {tile_size}px tiles is too small to hold the start tile")]
    BoardTooSmall { canvas_size: u16, tile_size: u16 },
}

/// Board settings, read from an optional TOML file.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub canvas_size: u16,
    pub tile_size: u16,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Validates the settings and builds the board.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }

        let grid = Grid::from_canvas(self.canvas_size, self.tile_size);
        if !grid.contains(START_POSITION) {
            return Err(ConfigError::BoardTooSmall {
                canvas_size: self.canvas_size,
                tile_size: self.tile_size,
            });
        }

        Ok(grid)
    }
}
