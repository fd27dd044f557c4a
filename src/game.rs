use tracing::{debug, info};

use crate::board::Board;
use crate::types::{BOARD_SIZE, Color, GameResult, GameSnapshot, Position, ValidMove};

/// One game of Reversi: the board plus pass/finish bookkeeping.
///
/// Contract:
/// - `result` is `Some` only after `finished` became `true`.
/// - A successful placement clears `passed`, so only two passes in a row end
///   the game.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    passed: bool,
    finished: bool,
    result: Option<GameResult>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the playable area as `grid[y - 1][x - 1]`.
    pub fn get_board_situation(&self) -> [[Option<Color>; BOARD_SIZE]; BOARD_SIZE] {
        self.board.to_color_grid()
    }

    /// Places a disc for `color`. Returns `false` and changes nothing when
    /// the square is not a legal move.
    pub fn put_disc(&mut self, pos: Position, color: Color) -> bool {
        if !self.board.update(pos, color) {
            debug!(x = pos.x(), y = pos.y(), color = color.name(), "rejected placement");
            return false;
        }

        debug!(x = pos.x(), y = pos.y(), color = color.name(), "disc placed");
        self.passed = false;
        true
    }

    /// Lists every legal square for `color` in row-major order, paired with
    /// the size of its changeable set.
    pub fn get_valid(&self, color: Color) -> Vec<ValidMove> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Position::from_index)
            .filter(|&pos| self.board.is_empty_at(pos))
            .filter_map(|pos| {
                let flip_count = self.board.get_changeable(pos, color).len();
                (flip_count > 1).then_some(ValidMove {
                    position: pos,
                    flip_count,
                })
            })
            .collect()
    }

    /// Passes the turn for `color`.
    /// Returns `false` without touching any state when a legal move exists.
    pub fn take_pass(&mut self, color: Color) -> bool {
        if !self.get_valid(color).is_empty() {
            debug!(color = color.name(), "rejected pass");
            return false;
        }

        if self.passed {
            info!("two consecutive passes, game finished");
            self.finished = true;
        }
        self.passed = true;
        debug!(color = color.name(), "turn passed");
        true
    }

    /// Ends the game immediately. The conceding side loses regardless of the
    /// disc counts.
    pub fn surrender(&mut self, is_user: bool) -> bool {
        self.finished = true;
        self.result = Some(if is_user {
            GameResult::Lose
        } else {
            GameResult::Win
        });
        info!(is_user, "surrendered");
        true
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Decides the result from the disc counts.
    ///
    /// `is_user` and `color` describe the side whose action ended the game;
    /// together they translate "more discs wins" into the user's point of
    /// view.
    ///
    /// # Panics
    /// Panics if the game is not finished.
    pub fn set_result(&mut self, is_user: bool, color: Color) {
        assert!(self.finished, "set_result called before the game finished");

        let (black, white) = self.board.count();
        let ender_is_user_side = |winner: Color| (color == winner) == is_user;
        let result = if black > white {
            if ender_is_user_side(Color::Black) {
                GameResult::Win
            } else {
                GameResult::Lose
            }
        } else if white > black {
            if ender_is_user_side(Color::White) {
                GameResult::Win
            } else {
                GameResult::Lose
            }
        } else {
            GameResult::Draw
        };

        info!(black, white, ?result, "game result decided");
        self.result = Some(result);
    }

    /// # Panics
    /// Panics if no result has been decided yet.
    pub fn get_result(&self) -> GameResult {
        match self.result {
            Some(result) => result,
            None => panic!("get_result called before a result was decided"),
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.board.count()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (black_count, white_count) = self.board.count();
        GameSnapshot {
            board: self.board.to_color_grid().into_iter().flatten().collect(),
            black_count,
            white_count,
            is_finished: self.finished,
            result: self.result,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }
}
