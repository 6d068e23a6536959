//! Help screen — scrollable key reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// A titled group of `(keys, description)` bindings.
struct KeyGroup {
    title: &'static str,
    bindings: &'static [(&'static str, &'static str)],
}

static KEY_GROUPS: &[KeyGroup] = &[
    KeyGroup {
        title: "Abertura de Conta",
        bindings: &[
            ("Tab / \u{2193}", "próximo campo"),
            ("Shift-Tab / \u{2191}", "campo anterior"),
            ("\u{2190} / \u{2192}", "sexo: opção; limite: -/+ R$ 100; estudante: alternar"),
            ("Espaço", "sexo: próxima opção; estudante: alternar; botão: abrir conta"),
            ("PgDn / PgUp", "limite: -/+ R$ 1000"),
            ("Home / End", "limite: mínimo / máximo"),
            ("Backspace", "apagar caractere"),
            ("Enter", "abrir conta"),
            ("Esc", "sair"),
            ("F1", "ajuda"),
            ("Ctrl+C", "sair"),
        ],
    },
    KeyGroup {
        title: "Alerta",
        bindings: &[("Enter / Esc / Espaço", "fechar o alerta")],
    },
    KeyGroup {
        title: "Ajuda",
        bindings: &[
            ("\u{2191} / \u{2193}", "rolar"),
            ("Home / End", "início / fim"),
            ("q / Esc", "voltar"),
        ],
    },
];

/// Lays out every key group: a blank line, the bold title, then one aligned
/// row per binding.
fn help_lines() -> Vec<Line<'static>> {
    let key_width = KEY_GROUPS
        .iter()
        .flat_map(|group| group.bindings)
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(Color::DarkGray);

    KEY_GROUPS
        .iter()
        .flat_map(|group| {
            let header = [
                Line::from(""),
                Line::from(Span::styled(group.title, title_style)),
            ];
            let rows = group.bindings.iter().map(move |(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<key_width$}  "), key_style),
                    Span::styled(*desc, desc_style),
                ])
            });
            header.into_iter().chain(rows)
        })
        .collect()
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a help screen scrolled to the top, returning to [`Screen::AccountForm`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::AccountForm,
        }
    }

    /// Index of the first visible line.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Highest scroll offset: the last line of the reference at the top.
    pub fn max_scroll(&self) -> u16 {
        u16::try_from(help_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Screen to return to when help is dismissed.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Scrolls back to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll()),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            KeyCode::Char('q') | KeyCode::Esc => return Action::Navigate(self.origin),
            _ => {}
        }
        Action::None
    }
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Ajuda – {} ", state.origin().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(help_lines()).scroll((state.scroll(), 0)),
        content_area,
    );
    frame.render_widget(
        Paragraph::new("\u{2191}/\u{2193}: rolar  q/Esc: voltar")
            .style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn lines_text() -> Vec<String> {
        help_lines()
            .into_iter()
            .map(|l| l.spans.into_iter().map(|s| s.content.into_owned()).collect())
            .collect()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_starts_at_top_returning_to_form() {
            let state = HelpState::default();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::AccountForm);
        }

        #[test]
        fn set_origin_stores_screen() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Help);
            assert_eq!(state.origin(), Screen::Help);
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn down_then_up() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 2);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn up_at_top_saturates() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_stops_at_last_line() {
            let mut state = HelpState::new();
            for _ in 0..500 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.scroll(), state.max_scroll());
        }

        #[test]
        fn up_responds_immediately_after_overscrolling() {
            let mut state = HelpState::new();
            for _ in 0..500 {
                state.handle_key(press(KeyCode::Down));
            }
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), state.max_scroll() - 1);
        }

        #[test]
        fn home_and_end_jump() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::End));
            assert_eq!(state.scroll(), state.max_scroll());
            state.handle_key(press(KeyCode::Home));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn max_scroll_is_last_line_index() {
            let state = HelpState::new();
            assert_eq!(usize::from(state.max_scroll()), help_lines().len() - 1);
        }

        #[test]
        fn reset_returns_to_top() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::End));
            state.reset();
            assert_eq!(state.scroll(), 0);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn q_and_esc_return_to_origin() {
            for code in [KeyCode::Char('q'), KeyCode::Esc] {
                let mut state = HelpState::new();
                assert_eq!(
                    state.handle_key(press(code)),
                    Action::Navigate(Screen::AccountForm)
                );
            }
        }

        #[test]
        fn other_keys_do_nothing() {
            let mut state = HelpState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
            assert_eq!(state.scroll(), 0);
        }
    }

    mod content {
        use super::*;

        #[test]
        fn lists_every_group_title() {
            let text = lines_text();
            for group in KEY_GROUPS {
                assert!(text.iter().any(|l| l == group.title), "{} missing", group.title);
            }
        }

        #[test]
        fn includes_help_navigation_keys() {
            let text = lines_text().concat();
            assert!(text.contains("início / fim"));
        }

        #[test]
        fn descriptions_start_in_one_column() {
            let columns: Vec<usize> = help_lines()
                .iter()
                .filter(|l| l.spans.len() == 2)
                .map(|l| l.spans[0].content.chars().count())
                .collect();
            assert!(!columns.is_empty());
            assert!(columns.iter().all(|&c| c == columns[0]));
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_help(state: &HelpState) -> String {
            let backend = TestBackend::new(100, 30);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_help(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_names_origin() {
            let output = render_help(&HelpState::new());
            assert!(output.contains("Ajuda – Abertura de Conta"));
        }

        #[test]
        fn shows_keys_and_footer() {
            let output = render_help(&HelpState::new());
            assert!(output.contains("abrir conta"));
            assert!(output.contains("q/Esc: voltar"));
        }

        #[test]
        fn scrolling_hides_top_lines() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::End));
            let output = render_help(&state);
            assert!(!output.contains("próximo campo"));
            assert!(output.contains("voltar"));
        }
    }
}
