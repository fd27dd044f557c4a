use std::rc::Rc;

use tracing::{debug, info};

#[cfg(test)]
use crate::{board::Board, game::Game};
use crate::player::{Opponent, Player, SharedGame, shared_game};
use crate::types::{BOARD_SIZE, Color, GameResult, GameSnapshot, Position, ValidMove};

/// Whose move comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    User,
    Opponent,
}

/// A user against the computer on one shared game.
///
/// Whichever side's pass ends the game is the one recorded with
/// `set_result`, so the result always comes out in the user's perspective.
pub struct Matchup {
    game: SharedGame,
    user: Player,
    opponent: Opponent,
}

impl Matchup {
    pub fn new(user_color: Color) -> Self {
        let game = shared_game();
        let user = Player::new(Rc::clone(&game), user_color);
        let opponent = Opponent::new(Rc::clone(&game), user_color.opponent());
        info!(user = user_color.name(), "new game");
        Self {
            game,
            user,
            opponent,
        }
    }

    pub fn user_color(&self) -> Color {
        self.user.color()
    }

    pub fn opponent_color(&self) -> Color {
        self.opponent.color()
    }

    /// Black always moves first.
    pub fn first_turn(&self) -> Turn {
        if self.user_color() == Color::Black {
            Turn::User
        } else {
            Turn::Opponent
        }
    }

    /// Returns `false` for an illegal square or once the game is over.
    pub fn user_put(&self, pos: Position) -> bool {
        if self.refuse_if_over("place") {
            return false;
        }
        self.user.put_disc(pos)
    }

    /// Passes for the user. Returns `false` if the user still has a move or
    /// the game is already over.
    pub fn user_pass(&self) -> bool {
        if self.refuse_if_over("pass") {
            return false;
        }
        if !self.user.take_pass() {
            return false;
        }
        if self.is_finished() {
            self.game.borrow_mut().set_result(true, self.user_color());
        }
        true
    }

    /// Concedes the game. Returns `false` if it had already ended.
    pub fn user_surrender(&self) -> bool {
        if self.refuse_if_over("surrender") {
            return false;
        }
        self.user.surrender(true)
    }

    /// Lets the computer play. Returns `true` if it placed a disc and
    /// `false` if it passed or the game is already over.
    pub fn opponent_turn(&self) -> bool {
        if self.refuse_if_over("opponent move") {
            return false;
        }
        if self.opponent.make_move() {
            return true;
        }
        if self.is_finished() {
            self.game
                .borrow_mut()
                .set_result(false, self.opponent_color());
        }
        false
    }

    fn refuse_if_over(&self, action: &str) -> bool {
        let over = self.is_finished();
        if over {
            debug!(action, "game is already over");
        }
        over
    }

    pub fn is_finished(&self) -> bool {
        self.game.borrow().is_finished()
    }

    /// Returns the result once the game has finished.
    pub fn result(&self) -> Option<GameResult> {
        let game = self.game.borrow();
        game.is_finished().then(|| game.get_result())
    }

    pub fn board(&self) -> [[Option<Color>; BOARD_SIZE]; BOARD_SIZE] {
        self.game.borrow().get_board_situation()
    }

    pub fn count(&self) -> (u8, u8) {
        self.game.borrow().count()
    }

    pub fn user_valid_moves(&self) -> Vec<ValidMove> {
        self.game.borrow().get_valid(self.user_color())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.borrow().snapshot()
    }

    #[cfg(test)]
    fn with_board(user_color: Color, board: Board) -> Self {
        let matchup = Self::new(user_color);
        *matchup.game.borrow_mut() = Game::with_board(board);
        matchup
    }
}
