use crate::types::{BOARD_SIZE, Color, Position};

const GRID_SIZE: usize = BOARD_SIZE + 2;
const LOWER_WALL: usize = 0;
const UPPER_WALL: usize = GRID_SIZE - 1;
const LOWER_CENTER: usize = 4;
const UPPER_CENTER: usize = 5;
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Square {
    Black,
    White,
    Empty,
    Wall,
}

impl From<Color> for Square {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Square::Black,
            Color::White => Square::White,
        }
    }
}

/// Reversi board stored as a 10x10 grid whose outer ring is `Wall`.
///
/// The wall ring terminates every direction scan, so a walk that starts on
/// a playable square never leaves the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: [[Square; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (4,4)=black, (5,4)=white, (4,5)=white, (5,5)=black.
    pub fn new() -> Self {
        let mut grid = [[Square::Empty; GRID_SIZE]; GRID_SIZE];
        for i in 0..GRID_SIZE {
            grid[LOWER_WALL][i] = Square::Wall;
            grid[UPPER_WALL][i] = Square::Wall;
            grid[i][LOWER_WALL] = Square::Wall;
            grid[i][UPPER_WALL] = Square::Wall;
        }

        grid[LOWER_CENTER][LOWER_CENTER] = Square::Black;
        grid[LOWER_CENTER][UPPER_CENTER] = Square::White;
        grid[UPPER_CENTER][LOWER_CENTER] = Square::White;
        grid[UPPER_CENTER][UPPER_CENTER] = Square::Black;

        Self { grid }
    }

    /// Returns the target square followed by every disc that would flip if
    /// `color` were placed there. A length of 1 means the move is illegal.
    pub fn get_changeable(&self, pos: Position, color: Color) -> Vec<Position> {
        let mut changeable = vec![pos];
        if self.square(pos) != Square::Empty {
            return changeable;
        }

        let me = Square::from(color);
        let opp = Square::from(color.opponent());
        let (x, y) = (pos.x() as isize, pos.y() as isize);

        for (dx, dy) in DIRECTIONS {
            let mut step = 1;
            let mut run = Vec::new();
            while self.at(x + dx * step, y + dy * step) == opp {
                run.push((x + dx * step, y + dy * step));
                step += 1;
            }
            if !run.is_empty() && self.at(x + dx * step, y + dy * step) == me {
                changeable.extend(run.into_iter().filter_map(|(rx, ry)| {
                    Position::new(rx as u8, ry as u8)
                }));
            }
        }

        changeable
    }

    /// Places a disc and flips captured discs.
    /// Returns `false` and leaves the board untouched when the move is illegal.
    pub fn update(&mut self, pos: Position, color: Color) -> bool {
        let changeable = self.get_changeable(pos, color);
        if changeable.len() <= 1 {
            return false;
        }

        for p in changeable {
            self.grid[p.y() as usize][p.x() as usize] = Square::from(color);
        }
        true
    }

    /// Returns the playable area as `grid[y - 1][x - 1]`, `None` for empty.
    pub fn to_color_grid(&self) -> [[Option<Color>; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in out.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = match self.grid[row + 1][col + 1] {
                    Square::Black => Some(Color::Black),
                    Square::White => Some(Color::White),
                    Square::Empty | Square::Wall => None,
                };
            }
        }
        out
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.grid
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), square| match square {
                Square::Black => (black + 1, white),
                Square::White => (black, white + 1),
                _ => (black, white),
            })
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    fn square(&self, pos: Position) -> Square {
        self.grid[pos.y() as usize][pos.x() as usize]
    }

    fn at(&self, x: isize, y: isize) -> Square {
        self.grid[y as usize][x as usize]
    }

    /// Builds a board from eight rows of `B`, `W` and `-`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), BOARD_SIZE, "row {y} must have 8 cells");
            for (x, ch) in row.chars().enumerate() {
                board.grid[y + 1][x + 1] = match ch {
                    'B' => Square::Black,
                    'W' => Square::White,
                    '-' => Square::Empty,
                    other => panic!("unexpected cell {other:?}"),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    fn all_positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position::from_index)
    }

    #[test]
    fn initial_board_has_four_center_discs() {
        let board = Board::new();
        let grid = board.to_color_grid();

        assert_eq!(board.count(), (2, 2));
        assert_eq!(grid[3][3], Some(Color::Black));
        assert_eq!(grid[3][4], Some(Color::White));
        assert_eq!(grid[4][3], Some(Color::White));
        assert_eq!(grid[4][4], Some(Color::Black));

        let empty = grid.iter().flatten().filter(|c| c.is_none()).count();
        assert_eq!(empty, 60);
    }

    #[test]
    fn border_ring_is_wall_and_playable_area_never_is() {
        let board = Board::new();
        for (y, row) in board.grid.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                let on_border =
                    x == LOWER_WALL || x == UPPER_WALL || y == LOWER_WALL || y == UPPER_WALL;
                assert_eq!(*square == Square::Wall, on_border, "({x},{y})");
            }
        }
    }

    #[test]
    fn changeable_always_starts_with_target_square() {
        let board = Board::new();
        for color in [Color::Black, Color::White] {
            for p in all_positions() {
                let changeable = board.get_changeable(p, color);
                assert_eq!(changeable[0], p);
            }
        }
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();
        let legal: Vec<Position> = all_positions()
            .filter(|&p| board.get_changeable(p, Color::Black).len() > 1)
            .collect();

        assert_eq!(legal, vec![pos(5, 3), pos(6, 4), pos(3, 5), pos(4, 6)]);
    }

    #[test]
    fn update_flips_one_disc_from_opening() {
        let mut board = Board::new();

        assert!(board.update(pos(5, 3), Color::Black));

        let grid = board.to_color_grid();
        assert_eq!(board.count(), (4, 1));
        assert_eq!(grid[2][4], Some(Color::Black)); // (5,3)
        assert_eq!(grid[3][4], Some(Color::Black)); // (5,4) flipped
        assert_eq!(grid[4][3], Some(Color::White)); // (4,5) untouched
        let empty = grid.iter().flatten().filter(|c| c.is_none()).count();
        assert_eq!(empty, 59);
    }

    #[test]
    fn illegal_update_returns_false_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board;

        assert!(!board.update(pos(1, 1), Color::Black));
        assert!(!board.update(pos(4, 4), Color::White)); // occupied
        assert_eq!(board, before);
    }

    #[test]
    fn occupied_square_is_never_legal_even_with_flanking_runs() {
        let board = Board::from_rows([
            "--------",
            "--------",
            "--------",
            "---BWWB-",
            "--------",
            "--------",
            "--------",
            "--------",
        ]);

        // (6,4) would be flanked from (5,4), but (5,4) already holds a disc.
        assert_eq!(board.get_changeable(pos(5, 4), Color::Black), vec![pos(5, 4)]);
    }

    #[test]
    fn collects_runs_in_several_directions() {
        let mut board = Board::from_rows([
            "B--B--B-",
            "-W-W-W--",
            "--WWW---",
            "BWW-WWB-",
            "--WWW---",
            "-W-W-W--",
            "B--B--B-",
            "--------",
        ]);
        let before = board.count();

        let changeable = board.get_changeable(pos(4, 4), Color::Black);
        // all eight directions capture two discs each
        assert_eq!(changeable.len(), 1 + 8 * 2);

        assert!(board.update(pos(4, 4), Color::Black));
        let after = board.count();
        assert_eq!(after.0, before.0 + 17);
        assert_eq!(after.1, before.1 - 16);
    }

    #[test]
    fn run_ending_on_empty_or_wall_is_discarded() {
        let board = Board::from_rows([
            "WWWWWWW-",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
        ]);

        // Walking left from (8,1) meets only white discs then the wall.
        assert_eq!(board.get_changeable(pos(8, 1), Color::Black).len(), 1);
    }

    #[test]
    fn legal_move_grows_mover_and_shrinks_opponent() {
        let mut board = Board::new();
        let moves = [
            (pos(5, 3), Color::Black),
            (pos(4, 3), Color::White),
            (pos(3, 3), Color::Black),
            (pos(6, 5), Color::White),
        ];

        for (p, color) in moves {
            let (black, white) = board.count();
            let flipped = board.get_changeable(p, color).len() as u8 - 1;
            assert!(board.update(p, color), "{p:?} should be legal for {color:?}");
            let (nb, nw) = board.count();

            assert_eq!(nb + nw, black + white + 1);
            match color {
                Color::Black => {
                    assert_eq!(nb, black + flipped + 1);
                    assert_eq!(nw, white - flipped);
                }
                Color::White => {
                    assert_eq!(nw, white + flipped + 1);
                    assert_eq!(nb, black - flipped);
                }
            }
        }
    }
}
