//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use minimax_tictactoe::{ComputerTurn, GameController, Position, SessionView, TurnScheduler};
use tracing::{debug, info, instrument};

use super::input::{GameKey, game_key};

/// Longest name accepted at the prompt.
const MAX_NAME_LEN: usize = 24;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Asking for the player's name.
    NameEntry {
        /// Text typed so far.
        input: String,
    },
    /// A game is on the board.
    Playing,
}

/// Whether the UI loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App<S> {
    controller: GameController<S>,
    screen: Screen,
    cursor: Position,
    default_name: String,
    frame: u64,
}

impl<S: TurnScheduler> App<S> {
    /// Creates the app on the name prompt.
    pub fn new(controller: GameController<S>, default_name: impl Into<String>) -> Self {
        Self {
            controller,
            screen: Screen::NameEntry {
                input: String::new(),
            },
            cursor: Position::Center,
            default_name: default_name.into(),
            frame: 0,
        }
    }

    /// Skips the prompt and starts a game for `name`.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name: &str) {
        let name = if name.trim().is_empty() {
            self.default_name.clone()
        } else {
            name.to_string()
        };
        self.controller.start(&name);
        self.cursor = Position::Center;
        self.screen = Screen::Playing;
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Frames drawn so far, drives the win animation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Render snapshot of the game.
    pub fn view(&self) -> SessionView {
        self.controller.view()
    }

    /// Advances the animation clock.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Plays a computer turn delivered by the scheduler.
    pub fn computer_turn(&mut self, ticket: ComputerTurn) {
        self.controller.computer_move(ticket);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match &mut self.screen {
            Screen::NameEntry { input } => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return AppAction::Quit;
                }
                match key.code {
                    KeyCode::Esc => return AppAction::Quit,
                    KeyCode::Enter => {
                        let name = std::mem::take(input);
                        self.start_game(&name);
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) if !c.is_control() && input.chars().count() < MAX_NAME_LEN => {
                        input.push(c);
                    }
                    _ => {}
                }
                AppAction::Continue
            }
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match game_key(self.cursor, key) {
            GameKey::Quit => {
                info!("User quit");
                return AppAction::Quit;
            }
            GameKey::Cursor(pos) => self.cursor = pos,
            GameKey::Place(pos) => {
                self.cursor = pos;
                if !self.controller.submit_move(pos.to_index()) {
                    debug!(%pos, "Move ignored");
                }
            }
            GameKey::Restart => self.controller.restart(),
            GameKey::NewPlayer => {
                self.screen = Screen::NameEntry {
                    input: String::new(),
                };
            }
            GameKey::Ignore => {}
        }
        AppAction::Continue
    }
}
