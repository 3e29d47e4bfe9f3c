use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameStatus;
use crate::renderer::GameView;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, view: &GameView<'_>) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(view)).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn info_line(view: &GameView<'_>) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(view.score.to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(view.speed.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(view.snake.len().to_string(), value),
        Span::styled(format!("  {}", status_label(view.status)), label),
    ])
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "ready",
        GameStatus::Running => "running",
        GameStatus::Paused => "paused",
        GameStatus::GameOver => "game over",
    }
}
