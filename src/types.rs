use serde::Serialize;

pub const BOARD_SIZE: usize = 8;

/// Side of a disc. Empty squares are reported as `None` wherever a board
/// view is handed out, so a player's color is always one of these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
        }
    }
}

/// A 1-indexed board coordinate, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Returns `None` unless both coordinates are within `1..=8`.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        let range = 1..=BOARD_SIZE as u8;
        if range.contains(&x) && range.contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Builds a position from a row-major index into the 8x8 playable area.
    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < BOARD_SIZE * BOARD_SIZE);
        Self {
            x: (idx % BOARD_SIZE) as u8 + 1,
            y: (idx / BOARD_SIZE) as u8 + 1,
        }
    }
}

/// Outcome of a finished game, always from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    Win,
    Lose,
    Draw,
}

/// A legal placement together with the size of its changeable set.
///
/// Contract:
/// - `flip_count` includes the placed disc, so the discs actually turned
///   over are `flip_count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidMove {
    pub position: Position,
    pub flip_count: usize,
}

/// Public game state handed to frontends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major, 64 cells, `None` for an empty square.
    pub board: Vec<Option<Color>>,
    pub black_count: u8,
    pub white_count: u8,
    pub is_finished: bool,
    /// Contract:
    /// - `Some` only once the game has finished and its result was decided.
    pub result: Option<GameResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range_coordinates() {
        assert!(Position::new(1, 1).is_some());
        assert!(Position::new(8, 8).is_some());
        assert!(Position::new(0, 4).is_none());
        assert!(Position::new(4, 9).is_none());
    }

    #[test]
    fn from_index_maps_row_major() {
        assert_eq!(Position::from_index(0), Position::new(1, 1).unwrap());
        assert_eq!(Position::from_index(10), Position::new(3, 2).unwrap());
        assert_eq!(Position::from_index(63), Position::new(8, 8).unwrap());
    }

    #[test]
    fn opponent_swaps_sides() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
