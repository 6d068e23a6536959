//! Blocking alert popup drawn over the current screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// A dismissible message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    title: String,
    messages: Vec<String>,
}

impl Alert {
    /// Creates an alert with one line per message.
    pub fn new(title: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Returns a rectangle of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders the alert centered over `area`, clearing what is underneath.
#[mutants::skip]
pub fn draw_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    // Messages, a blank line, the dismiss hint, and the border.
    let height = alert.messages.len() as u16 + 4;
    let popup = centered(area, 50, height);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut lines: Vec<Line> = alert
        .messages
        .iter()
        .map(|m| Line::from(Span::styled(m.as_str(), Style::default().fg(Color::White))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/Esc: OK",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
