use rand::Rng;

use crate::grid::Grid;
use crate::snake::{Position, Snake};

/// Picks a uniformly random tile not covered by the snake.
///
/// Samples are drawn from the whole board and rejected while they land on a
/// segment. There is no retry limit: a board completely filled by the snake
/// never yields a tile.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, grid: Grid) -> Position {
    debug_assert!(
        snake.len() < grid.total_tiles(),
        "place_food: no free tiles on a {0}x{0} board",
        grid.tile_count(),
    );

    loop {
        let candidate = Position {
            x: rng.gen_range(0..grid.tile_count()),
            y: rng.gen_range(0..grid.tile_count()),
        };

        if !snake.occupies(candidate) {
            tracing::trace!(x = candidate.x, y = candidate.y, "placed food");
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::Grid;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::place_food;

    #[test]
    fn food_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::from_canvas(80, 20);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
                Position { x: 3, y: 0 },
                Position { x: 3, y: 1 },
            ],
            Direction::Left,
        );

        for _ in 0..200 {
            let food = place_food(&mut rng, &snake, grid);
            assert!(grid.contains(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn single_free_tile_is_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::from_canvas(2, 1);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Left,
        );

        assert_eq!(place_food(&mut rng, &snake, grid), Position { x: 0, y: 1 });
    }
}
