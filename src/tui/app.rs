use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::model::{ConfirmedSnapshot, Limit};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{AccountFormState, HelpState, draw_account_form, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The account opening form.
    AccountForm,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::AccountForm => "Abertura de Conta",
            Self::Help => "Ajuda",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    account_form: AccountFormState,
    help: HelpState,
    confirmed: Option<ConfirmedSnapshot>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::AccountForm`] screen with the
    /// limit slider at `initial_limit`.
    pub fn new(initial_limit: Limit) -> Self {
        tracing::info!(limit = initial_limit.value(), "starting account form");
        Self {
            screen: Screen::AccountForm,
            account_form: AccountFormState::new(initial_limit),
            help: HelpState::new(),
            confirmed: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::AccountForm => {
                draw_account_form(&self.account_form, self.confirmed.as_ref(), frame, area)
            }
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.apply(Action::Navigate(Screen::Help));
            }
            return;
        }

        let action = match self.screen {
            Screen::AccountForm => self.account_form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                tracing::debug!(origin = self.screen.label(), "opening help");
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::OpenAccount(snapshot) => {
                tracing::info!(
                    name = snapshot.name(),
                    age = snapshot.age(),
                    sex = snapshot.sex().label(),
                    limit = snapshot.limit().value(),
                    student = snapshot.is_student(),
                    "account opened"
                );
                self.confirmed = Some(snapshot);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the form screen state.
    pub fn account_form(&self) -> &AccountFormState {
        &self.account_form
    }

    /// Returns the last confirmed submission, if any.
    pub fn confirmed(&self) -> Option<&ConfirmedSnapshot> {
        self.confirmed.as_ref()
    }
}
