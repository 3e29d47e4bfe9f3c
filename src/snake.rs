use std::collections::VecDeque;

use crate::input::{Direction, direction_change_is_valid};

/// Grid position in tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring position one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Result of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Step {
    pub head: Position,
    pub ate_food: bool,
    /// Tail segment dropped by this step; `None` when the snake grew.
    pub vacated: Option<Position>,
}

/// Snake body and heading state.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-segment snake at `start` with no heading.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self::from_segments(vec![start], Direction::Stationary)
    }

    /// Creates a snake from explicit body segments (front is head) already
    /// moving along `direction`.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Stores `direction` for the next tick unless it reverses the committed
    /// heading. Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !direction.is_moving() || !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Commits the pending heading and moves one tile.
    ///
    /// The new head is pushed on the front. The tail is kept when the head
    /// lands on `food`, otherwise it is dropped. Bounds and self-overlap are
    /// not checked here.
    pub fn advance(&mut self, food: Position) -> Step {
        self.direction = self.pending_direction;
        let head = self.head().step(self.direction);

        self.body.push_front(head);
        let ate_food = head == food;
        let vacated = if ate_food { None } else { self.body.pop_back() };

        Step {
            head,
            ate_food,
            vacated,
        }
    }

    /// Undoes the body change of `step`, the most recent `advance`.
    ///
    /// The committed heading is kept.
    pub fn retreat(&mut self, step: Step) {
        debug_assert_eq!(self.body.front(), Some(&step.head));

        let _ = self.body.pop_front();
        if let Some(tail) = step.vacated {
            self.body.push_back(tail);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Iterates over every segment except the head.
    pub fn body_excluding_head(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().skip(1)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    const NO_FOOD: Position = Position { x: -10, y: -10 };

    #[test]
    fn stationary_snake_stays_in_place() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        let step = snake.advance(NO_FOOD);

        assert_eq!(step.head, Position { x: 5, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });
        assert!(snake.request_direction(Direction::Right));

        let step = snake.advance(NO_FOOD);

        assert_eq!(step.head, Position { x: 6, y: 5 });
        assert!(!step.ate_food);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn eating_keeps_previous_tail() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
            Direction::Right,
        );

        let step = snake.advance(Position { x: 3, y: 2 });

        assert!(step.ate_food);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
            ]
        );
    }

    #[test]
    fn reverse_request_leaves_pending_direction_alone() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 1, y: 0 }, Position { x: 0, y: 0 }],
            Direction::Right,
        );

        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Right);

        snake.advance(NO_FOOD);
        assert_eq!(snake.head(), Position { x: 2, y: 0 });
    }

    #[test]
    fn reversal_is_judged_against_committed_heading() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 5, y: 5 }, Position { x: 4, y: 5 }],
            Direction::Right,
        );

        // Up is queued but not committed, so Left is still a reversal.
        assert!(snake.request_direction(Direction::Up));
        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn retreat_restores_previous_body() {
        let segments = vec![
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ];
        let mut snake = Snake::from_segments(segments.clone(), Direction::Right);
        snake.request_direction(Direction::Up);

        let step = snake.advance(NO_FOOD);
        assert_eq!(step.vacated, Some(Position { x: 1, y: 3 }));
        snake.retreat(step);

        assert_eq!(snake.segments().copied().collect::<Vec<_>>(), segments);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn retreat_after_eating_drops_new_head_only() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
            Direction::Right,
        );

        let step = snake.advance(Position { x: 3, y: 2 });
        assert_eq!(step.vacated, None);
        snake.retreat(step);

        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }]
        );
    }

    #[test]
    fn stationary_is_not_a_valid_request() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        assert!(!snake.request_direction(Direction::Stationary));
    }
}
