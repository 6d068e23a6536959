//! Form controls: text input, picker, slider, toggle and button.
//!
//! Each control occupies a bordered box three rows tall ([`CONTROL_HEIGHT`]).
//! The border is yellow when focused and dark grey otherwise.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};

/// Height in rows of every control.
pub const CONTROL_HEIGHT: u16 = 3;

fn control_block(label: &str, focused: bool) -> Block<'_> {
    let border_color = if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn cursor() -> Span<'static> {
    Span::styled(
        "\u{2588}",
        Style::default().add_modifier(Modifier::SLOW_BLINK),
    )
}

/// Renders a single-line text input. Shows `placeholder` dimmed while empty.
#[mutants::skip]
pub fn draw_text_input(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(value.to_string())]
    };
    if focused {
        spans.push(cursor());
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(control_block(label, focused));
    frame.render_widget(paragraph, area);
}

/// Renders a single-select picker showing the current option between arrows.
///
/// `placeholder` dims the option text, for the "nothing chosen" entry.
#[mutants::skip]
pub fn draw_picker(
    label: &str,
    option: &str,
    placeholder: bool,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let option_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let arrow_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("\u{25c2} ", arrow_style),
        Span::styled(option.to_string(), option_style),
        Span::styled(" \u{25b8}", arrow_style),
    ]);
    let paragraph = Paragraph::new(line).block(control_block(label, focused));
    frame.render_widget(paragraph, area);
}

/// Renders a horizontal slider filled to `ratio` (clamped to `[0, 1]`).
#[mutants::skip]
pub fn draw_slider(label: &str, ratio: f64, focused: bool, frame: &mut Frame, area: Rect) {
    let block = control_block(label, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Blue))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, inner);
}

/// Renders an on/off switch.
#[mutants::skip]
pub fn draw_toggle(label: &str, on: bool, focused: bool, frame: &mut Frame, area: Rect) {
    let (text, color) = if on {
        ("[\u{25cf}   ] Sim", Color::Green)
    } else {
        ("[   \u{25cb}] Não", Color::DarkGray)
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color),
    )))
    .block(control_block(label, focused));
    frame.render_widget(paragraph, area);
}

/// Renders a push button. Disabled buttons are dimmed and marked as such.
#[mutants::skip]
pub fn draw_button(label: &str, enabled: bool, focused: bool, frame: &mut Frame, area: Rect) {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
    };
    let text = if enabled {
        label.to_string()
    } else {
        format!("{label} (indisponível)")
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(control_block("", focused));
    frame.render_widget(paragraph, area);
}
