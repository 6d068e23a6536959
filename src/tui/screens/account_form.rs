//! Account form screen — name, age, sex, limit, student flag and submit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ConfirmedSnapshot, FormState, Limit, cycle};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{
    Alert, CONTROL_HEIGHT, SUMMARY_HEIGHT, draw_alert, draw_button, draw_picker, draw_slider,
    draw_summary, draw_text_input, draw_toggle,
};

/// Steps moved by PageUp/PageDown on the limit slider.
const LIMIT_PAGE: u32 = 10;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Name,
    Age,
    Sex,
    Limit,
    Student,
    Submit,
}

static TAB_ORDER: &[Control] = &[
    Control::Name,
    Control::Age,
    Control::Sex,
    Control::Limit,
    Control::Student,
    Control::Submit,
];

/// State for the account form screen.
#[derive(Debug, Clone)]
pub struct AccountFormState {
    form: FormState,
    focus: Control,
    alert: Option<Alert>,
}

impl Default for AccountFormState {
    fn default() -> Self {
        Self::new(Limit::default())
    }
}

impl AccountFormState {
    /// Creates an empty form with the limit slider at `limit`.
    pub fn new(limit: Limit) -> Self {
        Self {
            form: FormState::with_limit(limit),
            focus: Control::Name,
            alert: None,
        }
    }

    /// Returns the live form values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the focused control.
    pub fn focus(&self) -> Control {
        self.focus
    }

    /// Returns the open alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Returns `true` if the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_submittable()
    }

    fn focus_next(&mut self) {
        self.focus = cycle(TAB_ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(TAB_ORDER, self.focus, false);
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Control::Name => Some(&mut self.form.name),
            Control::Age => Some(&mut self.form.age_text),
            _ => None,
        }
    }

    /// Adjusts the focused picker, slider or toggle. `forward` is Right/Space.
    fn adjust(&mut self, forward: bool) {
        match self.focus {
            Control::Sex => {
                self.form.sex = if forward {
                    self.form.sex.next()
                } else {
                    self.form.sex.prev()
                };
            }
            Control::Limit => {
                self.form.limit = if forward {
                    self.form.limit.increase(1)
                } else {
                    self.form.limit.decrease(1)
                };
            }
            Control::Student => self.form.is_student = !self.form.is_student,
            Control::Name | Control::Age | Control::Submit => {}
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) -> Action {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        ) {
            self.alert = None;
        }
        Action::None
    }

    fn handle_limit_key(&mut self, code: KeyCode) -> bool {
        let limit = self.form.limit;
        self.form.limit = match code {
            KeyCode::PageUp => limit.increase(LIMIT_PAGE),
            KeyCode::PageDown => limit.decrease(LIMIT_PAGE),
            KeyCode::Home => Limit::min(),
            KeyCode::End => Limit::max(),
            _ => return false,
        };
        true
    }

    /// Validates the form and either confirms it or opens an alert.
    fn submit(&mut self) -> Action {
        match self.form.submit() {
            Ok(snapshot) => Action::OpenAccount(snapshot),
            Err(errors) => {
                tracing::debug!(failures = errors.len(), "submit rejected");
                let messages = errors.iter().map(ToString::to_string).collect();
                self.alert = Some(Alert::new("Erro", messages));
                Action::None
            }
        }
    }
}

impl ScreenState for AccountFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.alert.is_some() {
            return self.handle_alert_key(key);
        }

        if self.focus == Control::Limit && self.handle_limit_key(key.code) {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
                Action::None
            }
            KeyCode::Char(ch) => {
                if let Some(text) = self.text_mut() {
                    text.push(ch);
                } else if ch == ' ' {
                    if self.focus == Control::Submit {
                        return self.submit();
                    }
                    self.adjust(true);
                }
                Action::None
            }
            KeyCode::Right => {
                self.adjust(true);
                Action::None
            }
            KeyCode::Left => {
                self.adjust(false);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Renders the account form, the confirmation panel when `confirmed` is set,
/// and any open alert on top.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_account_form(
    state: &AccountFormState,
    confirmed: Option<&ConfirmedSnapshot>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Abertura de Conta ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary_height = if confirmed.is_some() { SUMMARY_HEIGHT } else { 0 };
    let [
        name_area,
        age_area,
        sex_area,
        limit_area,
        student_area,
        submit_area,
        summary_area,
        _spacer,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(CONTROL_HEIGHT),
        Constraint::Length(summary_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let form = state.form();
    let focused = |control: Control| state.focus() == control;

    draw_text_input(
        "Nome",
        &form.name,
        "Digite seu nome",
        focused(Control::Name),
        frame,
        name_area,
    );
    draw_text_input(
        "Idade",
        &form.age_text,
        "Digite sua idade",
        focused(Control::Age),
        frame,
        age_area,
    );
    draw_picker(
        "Sexo",
        form.sex.label(),
        !form.sex.is_selected(),
        focused(Control::Sex),
        frame,
        sex_area,
    );
    draw_slider(
        &format!("Limite da conta: {}", form.limit.whole()),
        form.limit.fraction(),
        focused(Control::Limit),
        frame,
        limit_area,
    );
    draw_toggle(
        "Estudante?",
        form.is_student,
        focused(Control::Student),
        frame,
        student_area,
    );
    draw_button(
        "Abrir Conta",
        state.can_submit(),
        focused(Control::Submit),
        frame,
        submit_area,
    );

    if let Some(snapshot) = confirmed {
        draw_summary(snapshot, frame, summary_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: campo  \u{2190}/\u{2192}: ajustar  Enter: abrir conta  F1: ajuda  Esc: sair",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(alert) = state.alert() {
        draw_alert(alert, frame, area);
    }
}
