use crate::snake::Position;

/// Square playfield measured in tiles.
///
/// The board is derived from a virtual canvas edge length and a fixed tile
/// edge length; only whole tiles count.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    tile_size: u16,
    tile_count: i32,
}

impl Grid {
    /// Builds the grid for a `canvas_size` x `canvas_size` surface.
    ///
    /// `tile_size` must be non-zero; validated configuration guarantees it.
    #[must_use]
    pub fn from_canvas(canvas_size: u16, tile_size: u16) -> Self {
        debug_assert!(tile_size > 0);
        Self {
            tile_size,
            tile_count: i32::from(canvas_size / tile_size.max(1)),
        }
    }

    /// Number of tiles along each axis.
    #[must_use]
    pub fn tile_count(self) -> i32 {
        self.tile_count
    }

    /// Edge length of one tile on the canvas.
    #[must_use]
    pub fn tile_size(self) -> u16 {
        self.tile_size
    }

    /// Returns the total number of tiles on the board.
    #[must_use]
    pub fn total_tiles(self) -> usize {
        let side = usize::try_from(self.tile_count).unwrap_or(0);
        side * side
    }

    /// Returns true when `position` lies on the board.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.tile_count
            && position.y < self.tile_count
    }
}
