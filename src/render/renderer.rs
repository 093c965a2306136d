use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::matrix::LedMatrix;
use crate::game::GameState;
use crate::metrics::GameMetrics;

/// Numbers shown above the matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub length: usize,
    pub tick_interval_ms: u32,
    pub lives: u32,
    pub wins: u32,
    pub best_length: usize,
    pub elapsed: String,
}

impl Scoreboard {
    pub fn capture(state: &GameState, metrics: &GameMetrics) -> Self {
        Self {
            length: state.snake.len(),
            tick_interval_ms: state.tick_interval_ms,
            lives: metrics.lives,
            wins: metrics.wins,
            best_length: metrics.best_length,
            elapsed: metrics.format_time(),
        }
    }
}

/// Terminal colour for an LED level; unlit LEDs stay faintly visible
pub fn led_color(level: u8) -> Color {
    if level == 0 {
        Color::DarkGray
    } else {
        Color::Rgb(level, level / 8, level / 8)
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        matrix: &LedMatrix,
        banner: Option<&str>,
        scoreboard: &Scoreboard,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(7), // Matrix
                Constraint::Length(3), // Banner
                Constraint::Min(0),
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(scoreboard), chunks[0]);

        // Two terminal columns per LED plus the border
        let matrix_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(12),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];
        frame.render_widget(self.render_matrix(matrix), matrix_area);

        if let Some(text) = banner {
            frame.render_widget(self.render_banner(text), chunks[2]);
        }

        frame.render_widget(self.render_controls(), chunks[4]);
    }

    fn render_matrix(&self, matrix: &LedMatrix) -> Paragraph<'_> {
        let lines: Vec<Line> = matrix
            .rows()
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&level| {
                        let glyph = if level == 0 { "· " } else { "● " };
                        Span::styled(glyph, Style::default().fg(led_color(level)))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            )
            .alignment(Alignment::Center)
    }

    fn render_banner<'a>(&self, text: &'a str) -> Paragraph<'a> {
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
    }

    fn render_stats(&self, scoreboard: &Scoreboard) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                scoreboard.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", scoreboard.tick_interval_ms), value),
            Span::raw("    "),
            Span::styled("Life: ", label),
            Span::styled(scoreboard.lives.to_string(), value),
            Span::raw("    "),
            Span::styled("Wins: ", label),
            Span::styled(scoreboard.wins.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(scoreboard.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(scoreboard.elapsed.clone(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("← / A", Style::default().fg(Color::Cyan)),
            Span::raw(" turn left | "),
            Span::styled("→ / B", Style::default().fg(Color::Cyan)),
            Span::raw(" turn right | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
