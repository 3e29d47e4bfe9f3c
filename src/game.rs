use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, Collision};
use crate::config::{BASE_SPEED, MAX_SPEED, POINTS_PER_FOOD, POINTS_PER_SPEED_STEP, START_POSITION};
use crate::food::place_food;
use crate::grid::Grid;
use crate::input::{Command, Direction};
use crate::renderer::{GameView, Renderer};
use crate::scheduler::TickScheduler;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Owns one session's game state and drives it through its lifecycle.
///
/// Ticks are requested from the injected scheduler and every settled state
/// is handed to the renderer. Invalid requests for the current status are
/// ignored rather than reported.
pub struct GameController<S, R> {
    /// Snake body; replaced on reset. Exposed for scenario setup.
    pub snake: Snake,
    /// Current food tile. Exposed for scenario setup.
    pub food: Position,
    status: GameStatus,
    score: u32,
    speed: u32,
    collision: Option<Collision>,
    grid: Grid,
    rng: StdRng,
    scheduler: S,
    renderer: R,
}

impl<S: TickScheduler, R: Renderer> GameController<S, R> {
    /// Creates an idle game with an entropy-seeded food placer.
    ///
    /// # Panics
    ///
    /// Panics when `grid` does not contain the start tile. `Settings::grid`
    /// validates this for configured boards.
    pub fn new(grid: Grid, scheduler: S, renderer: R) -> Self {
        Self::with_rng(grid, StdRng::from_entropy(), scheduler, renderer)
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    ///
    /// # Panics
    ///
    /// Panics when `grid` does not contain the start tile.
    pub fn new_with_seed(grid: Grid, seed: u64, scheduler: S, renderer: R) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed), scheduler, renderer)
    }

    fn with_rng(grid: Grid, mut rng: StdRng, scheduler: S, renderer: R) -> Self {
        assert!(
            grid.contains(START_POSITION),
            "a {0}x{0} board does not contain the start tile",
            grid.tile_count(),
        );

        let snake = Snake::new(START_POSITION);
        let food = place_food(&mut rng, &snake, grid);

        let mut controller = Self {
            snake,
            food,
            status: GameStatus::Idle,
            score: 0,
            speed: BASE_SPEED,
            collision: None,
            grid,
            rng,
            scheduler,
            renderer,
        };
        controller.render();
        controller
    }

    /// Dispatches one input command. `Quit` belongs to the host loop.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Direction(direction) => self.request_direction(direction),
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::Redraw => self.render(),
            Command::Quit => {}
        }
    }

    /// Begins a run heading right. A finished run is reset first.
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Idle => {}
            GameStatus::GameOver => self.reset(),
            GameStatus::Running | GameStatus::Paused => return,
        }

        self.snake.request_direction(Direction::Right);
        self.status = GameStatus::Running;
        tracing::info!("game started");

        self.scheduler.schedule(Duration::ZERO);
        self.render();
    }

    /// Switches between running and paused; ignored in any other status.
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => {
                self.scheduler.cancel();
                self.status = GameStatus::Paused;
                tracing::info!(score = self.score, "game paused");
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                self.scheduler.schedule(Duration::ZERO);
                tracing::info!("game resumed");
            }
            GameStatus::Idle | GameStatus::GameOver => return,
        }

        self.render();
    }

    /// Returns to a fresh idle board from any status.
    pub fn reset(&mut self) {
        self.scheduler.cancel();

        self.snake = Snake::new(START_POSITION);
        self.status = GameStatus::Idle;
        self.score = 0;
        self.speed = BASE_SPEED;
        self.collision = None;
        self.food = place_food(&mut self.rng, &self.snake, self.grid);
        tracing::info!("game reset");

        self.render();
    }

    /// Queues a heading for the next tick while running.
    ///
    /// Requests that reverse the committed heading are dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }

        if !self.snake.request_direction(direction) {
            tracing::trace!(?direction, "ignored direction request");
        }
    }

    /// Scheduler callback: advances one tick when running.
    ///
    /// A callback that arrives in any other status is stale and does nothing.
    pub fn on_timer(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let step = self.snake.advance(self.food);
        let collision = collision::check(
            step.head,
            self.grid.tile_count(),
            self.snake.body_excluding_head(),
        );

        if collision.is_fatal() {
            // The run ends on the last legal body, not the crashed one.
            self.snake.retreat(step);
            self.scheduler.cancel();
            self.status = GameStatus::GameOver;
            self.collision = Some(collision);
            tracing::info!(score = self.score, ?collision, "game over");
            self.render();
            return;
        }

        if step.ate_food {
            self.score += POINTS_PER_FOOD;
            self.food = place_food(&mut self.rng, &self.snake, self.grid);
            self.update_speed();
        }

        self.scheduler.schedule(self.tick_interval());
        self.render();
    }

    /// Delay between ticks at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks per second.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// What ended the last run, if it ended in a collision.
    #[must_use]
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn update_speed(&mut self) {
        if self.score % POINTS_PER_SPEED_STEP == 0 && self.speed < MAX_SPEED {
            self.speed += 1;
            tracing::debug!(speed = self.speed, score = self.score, "speed increased");
        }
    }

    fn render(&mut self) {
        let view = GameView {
            snake: &self.snake,
            food: self.food,
            status: self.status,
            score: self.score,
            speed: self.speed,
            grid: self.grid,
            collision: self.collision,
        };
        self.renderer.render(&view);
    }
}
