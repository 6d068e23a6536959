//! Confirmation panel listing the last opened account.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::ConfirmedSnapshot;

/// Rows needed to show a snapshot, borders included.
pub const SUMMARY_HEIGHT: u16 = 7;

/// Renders the confirmed data, one field per line, in a green box.
#[mutants::skip]
pub fn draw_summary(snapshot: &ConfirmedSnapshot, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Conta aberta ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines: Vec<Line> = snapshot
        .summary_lines()
        .into_iter()
        .map(|l| Line::from(Span::raw(l)))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
