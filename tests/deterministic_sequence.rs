use std::collections::HashSet;
use std::time::Duration;

use grid_snake::config::{BASE_SPEED, START_POSITION};
use grid_snake::game::{GameController, GameStatus};
use grid_snake::grid::Grid;
use grid_snake::input::{Command, Direction};
use grid_snake::renderer::{GameView, Renderer};
use grid_snake::scheduler::ManualScheduler;
use grid_snake::snake::{Position, Snake};

/// Keeps the segments of every frame it is asked to draw.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(GameStatus, Vec<Position>, u32)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &GameView<'_>) {
        self.frames.push((
            view.status,
            view.snake.segments().copied().collect(),
            view.score,
        ));
    }
}

type Game = GameController<ManualScheduler, RecordingRenderer>;

fn new_game(seed: u64) -> Game {
    GameController::new_with_seed(
        Grid::from_canvas(400, 20),
        seed,
        ManualScheduler::new(),
        RecordingRenderer::default(),
    )
}

fn fire(game: &mut Game) {
    assert!(game.scheduler_mut().fire(), "expected a pending tick");
    game.on_timer();
}

fn segments(game: &Game) -> Vec<Position> {
    game.snake.segments().copied().collect()
}

#[test]
fn first_tick_after_start_moves_right() {
    let mut game = new_game(42);
    assert_eq!(game.grid().tile_count(), 20);
    assert_eq!(segments(&game), vec![START_POSITION]);
    game.food = Position { x: 15, y: 15 };

    game.handle_command(Command::Start);
    fire(&mut game);

    assert_eq!(segments(&game), vec![Position { x: 6, y: 5 }]);
    assert_ne!(game.food, Position { x: 6, y: 5 });
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn reverse_request_is_ignored() {
    let mut game = new_game(1);
    game.start();
    game.snake = Snake::from_segments(
        vec![Position { x: 1, y: 0 }, Position { x: 0, y: 0 }],
        Direction::Right,
    );
    game.food = Position { x: 15, y: 15 };

    game.handle_command(Command::Direction(Direction::Left));
    fire(&mut game);

    assert_eq!(
        segments(&game),
        vec![Position { x: 2, y: 0 }, Position { x: 1, y: 0 }]
    );
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn eating_food_grows_and_scores() {
    let mut game = new_game(2);
    game.start();
    game.food = Position { x: 6, y: 5 };

    fire(&mut game);

    assert_eq!(game.snake.len(), 2);
    assert_eq!(game.score(), 10);
    assert!(!game.snake.occupies(game.food));
    assert!(game.grid().contains(game.food));
}

#[test]
fn leaving_left_edge_ends_game() {
    let mut game = new_game(3);
    game.start();
    game.snake = Snake::from_segments(vec![Position { x: 0, y: 7 }], Direction::Left);
    game.food = Position { x: 15, y: 15 };

    fire(&mut game);

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(segments(&game), vec![Position { x: 0, y: 7 }]);
    assert_eq!(game.scheduler().pending(), None);
}

#[test]
fn game_over_body_is_unique_and_on_board() {
    let mut game = new_game(7);
    game.start();
    game.snake = Snake::from_segments(
        vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ],
        Direction::Left,
    );
    game.food = Position { x: 15, y: 15 };

    game.handle_command(Command::Direction(Direction::Down));
    fire(&mut game);

    assert_eq!(game.status(), GameStatus::GameOver);
    let body = segments(&game);
    let unique: HashSet<Position> = body.iter().copied().collect();
    assert_eq!(unique.len(), body.len());
    assert!(body.iter().all(|segment| game.grid().contains(*segment)));

    let (status, drawn, _) = game.renderer().frames.last().cloned().expect("a frame");
    assert_eq!(status, GameStatus::GameOver);
    assert_eq!(drawn, body);
}

#[test]
fn reset_during_game_over_restores_initial_state() {
    let mut game = new_game(4);
    game.start();
    game.food = Position { x: 6, y: 5 };
    fire(&mut game);
    game.snake = Snake::from_segments(vec![Position { x: 19, y: 5 }], Direction::Right);
    game.food = Position { x: 0, y: 0 };
    fire(&mut game);
    assert_eq!(game.status(), GameStatus::GameOver);

    game.handle_command(Command::Reset);

    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.snake.head(), START_POSITION);
    assert_eq!(game.snake.direction(), Direction::Stationary);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed(), BASE_SPEED);
    assert!(!game.snake.occupies(game.food));
}

#[test]
fn every_settled_state_is_rendered() {
    let mut game = new_game(5);
    game.food = Position { x: 0, y: 0 };
    assert_eq!(game.renderer().frames.len(), 1);

    game.start();
    fire(&mut game);
    game.request_direction(Direction::Down);
    fire(&mut game);
    game.toggle_pause();
    game.toggle_pause();
    game.reset();

    let statuses: Vec<GameStatus> = game
        .renderer()
        .frames
        .iter()
        .map(|(status, _, _)| *status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            GameStatus::Idle,
            GameStatus::Running,
            GameStatus::Running,
            GameStatus::Running,
            GameStatus::Paused,
            GameStatus::Running,
            GameStatus::Idle,
        ]
    );
    assert_eq!(
        game.renderer().frames[3].1,
        vec![Position { x: 6, y: 6 }]
    );
}

#[test]
fn speed_change_only_affects_next_schedule() {
    let mut game = new_game(6);
    game.start();
    let base_interval = Duration::from_millis(1000 / u64::from(BASE_SPEED));

    for _ in 0..5 {
        game.food = game.snake.head().step(Direction::Right);
        fire(&mut game);
    }

    let history = game.scheduler().history();
    assert_eq!(history[0], Duration::ZERO);
    assert!(history[1..5].iter().all(|delay| *delay == base_interval));
    assert_eq!(
        history[5],
        Duration::from_millis(1000 / u64::from(BASE_SPEED + 1))
    );
}
