//! Screen-by-screen driver for a terminal game against the computer.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::console::Console;
use crate::error::SessionError;
use crate::matchup::{Matchup, Turn};
use crate::types::{Color, Position};
use crate::view::{self, ColorChoice, MenuChoice, Notice, UserAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    Config,
    GameStart(Color),
    UserTurn,
    OpponentTurn,
    Result,
    Exit,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// When set, new games skip the color menu.
    pub color: Option<Color>,
    pub opponent_delay: Duration,
}

pub struct Session<C> {
    console: C,
    options: SessionOptions,
    matchup: Option<Matchup>,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, options: SessionOptions) -> Self {
        Self {
            console,
            options,
            matchup: None,
        }
    }

    /// Runs menus and games until the user exits or closes the input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            debug!(?screen, "entering screen");
            screen = match screen {
                Screen::MainMenu => self.main_menu()?,
                Screen::Config => self.config()?,
                Screen::GameStart(color) => self.start_game(color),
                Screen::UserTurn => self.user_turn()?,
                Screen::OpponentTurn => self.opponent_turn()?,
                Screen::Result => self.result()?,
                Screen::Exit => Screen::Exit,
            };
        }
        self.console.write("Good bye!\n")
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn main_menu(&mut self) -> Result<Screen, SessionError> {
        self.console.write(view::main_menu())?;
        let choice = prompt(
            &mut self.console,
            "(input a number indicating an item you choose): ",
            view::parse_menu,
        )?;
        Ok(match (choice, self.options.color) {
            (Some(MenuChoice::NewGame), Some(color)) => Screen::GameStart(color),
            (Some(MenuChoice::NewGame), None) => Screen::Config,
            (Some(MenuChoice::Exit) | None, _) => Screen::Exit,
        })
    }

    fn config(&mut self) -> Result<Screen, SessionError> {
        self.console.write(view::color_menu())?;
        Ok(match prompt(&mut self.console, "> ", view::parse_color)? {
            Some(ColorChoice::Play(color)) => Screen::GameStart(color),
            Some(ColorChoice::Back) => Screen::MainMenu,
            None => Screen::Exit,
        })
    }

    fn start_game(&mut self, color: Color) -> Screen {
        let matchup = Matchup::new(color);
        let screen = match matchup.first_turn() {
            Turn::User => Screen::UserTurn,
            Turn::Opponent => Screen::OpponentTurn,
        };
        self.matchup = Some(matchup);
        screen
    }

    #[instrument(skip(self))]
    fn user_turn(&mut self) -> Result<Screen, SessionError> {
        let Some(matchup) = self.matchup.as_ref() else {
            return Ok(Screen::MainMenu);
        };
        let text = view::board(&matchup.board(), matchup.count(), matchup.user_color(), true);
        self.console.write(&text)?;

        loop {
            let Some(action) = prompt(&mut self.console, "> ", view::parse_action)? else {
                return Ok(Screen::Exit);
            };
            match action {
                UserAction::Put { x, y } => {
                    if Position::new(x, y).is_some_and(|pos| matchup.user_put(pos)) {
                        return Ok(Screen::OpponentTurn);
                    }
                    self.console.write(view::notice(Notice::InvalidPosition))?;
                }
                UserAction::Pass => {
                    if !matchup.user_pass() {
                        self.console.write(view::notice(Notice::InvalidPass))?;
                        continue;
                    }
                    return Ok(if matchup.is_finished() {
                        Screen::Result
                    } else {
                        Screen::OpponentTurn
                    });
                }
                UserAction::Surrender => {
                    matchup.user_surrender();
                    return Ok(Screen::Result);
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn opponent_turn(&mut self) -> Result<Screen, SessionError> {
        let Some(matchup) = self.matchup.as_ref() else {
            return Ok(Screen::MainMenu);
        };
        let text = view::board(
            &matchup.board(),
            matchup.count(),
            matchup.opponent_color(),
            false,
        );
        self.console.write(&text)?;

        if !self.options.opponent_delay.is_zero() {
            thread::sleep(self.options.opponent_delay);
        }

        if matchup.opponent_turn() {
            return Ok(Screen::UserTurn);
        }
        self.console.write(view::opponent_passed())?;
        Ok(if matchup.is_finished() {
            Screen::Result
        } else {
            Screen::UserTurn
        })
    }

    fn result(&mut self) -> Result<Screen, SessionError> {
        let Some(matchup) = self.matchup.take() else {
            return Ok(Screen::MainMenu);
        };
        if let Some(result) = matchup.result() {
            info!(?result, "game over");
            self.console.write(&view::result(result, matchup.count()))?;
        }
        Ok(match self.console.read_line("push enter to continue")? {
            Some(_) => Screen::MainMenu,
            None => Screen::Exit,
        })
    }
}

/// Reads lines until one parses. `Ok(None)` means the input was closed.
fn prompt<C: Console, T>(
    console: &mut C,
    text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, SessionError> {
    while let Some(line) = console.read_line(text)? {
        if let Some(value) = parse(&line) {
            return Ok(Some(value));
        }
        console.write(view::notice(Notice::InvalidInput))?;
    }
    Ok(None)
}
