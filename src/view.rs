//! Text shown on each screen and parsing of the lines typed in reply.

use colored::Colorize;

use crate::types::{BOARD_SIZE, Color, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Play(Color),
    Back,
}

/// What the user typed on their turn. Coordinates are not range-checked
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Put { x: u8, y: u8 },
    Pass,
    Surrender,
}

/// Problems reported back to the user before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidPosition,
    InvalidPass,
    InvalidInput,
}

pub fn parse_menu(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::NewGame),
        "2" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn parse_color(line: &str) -> Option<ColorChoice> {
    match line.trim() {
        "1" => Some(ColorChoice::Play(Color::Black)),
        "2" => Some(ColorChoice::Play(Color::White)),
        "3" => Some(ColorChoice::Back),
        _ => None,
    }
}

/// Accepts `x,y`, `p` (pass) and `s` (surrender).
pub fn parse_action(line: &str) -> Option<UserAction> {
    let line = line.trim();
    match line {
        "p" => return Some(UserAction::Pass),
        "s" => return Some(UserAction::Surrender),
        _ => {}
    }

    let (x, y) = line.split_once(',')?;
    Some(UserAction::Put {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
    })
}

pub fn main_menu() -> &'static str {
    "REVERSI\n\
     \n\
     <Main Menu>\n\
     Choose a play mode from items below\n\
     -----------------\n\
     1: New Game\n\
     2: Exit\n\
     -----------------\n"
}

pub fn color_menu() -> &'static str {
    "<Config>\n\
     choose a color showing your playing side.\n\
     if you want to go back to the main menu, choose 3.\n\
     ---------------\n\
     1: Black\n\
     2: White\n\
     3: Main Menu\n\
     ---------------\n"
}

fn disc(cell: Option<Color>) -> String {
    match cell {
        Some(Color::Black) => "B".bold().bright_white().on_black().to_string(),
        Some(Color::White) => "W".bold().black().on_bright_white().to_string(),
        None => "-".dimmed().to_string(),
    }
}

/// Renders the board with 1-based column and row headers, then whose turn
/// it is and the actions available to the user.
pub fn board(
    grid: &[[Option<Color>; BOARD_SIZE]; BOARD_SIZE],
    counts: (u8, u8),
    turn: Color,
    is_user: bool,
) -> String {
    let mut out = String::from("<BOARD>\n========================\n ");
    for x in 1..=BOARD_SIZE {
        out.push_str(&format!(" {x}"));
    }
    out.push('\n');

    for (y, row) in grid.iter().enumerate() {
        out.push_str(&(y + 1).to_string());
        for cell in row {
            out.push(' ');
            out.push_str(&disc(*cell));
        }
        out.push('\n');
    }
    out.push_str("========================\n");

    out.push_str(&format!("BLACK: {}  WHITE: {}\n", counts.0, counts.1));
    out.push_str(&format!("this is {} turn\n", turn.name()));
    if is_user {
        out.push_str(
            "input characters indicating your action\n\
             ----------------------------------------\n\
             x,y: coordinates putting your disc at\n\
             p: pass\n\
             s: surrender\n\
             ----------------------------------------\n",
        );
    } else {
        out.push_str("the opponent player is thinking now\n");
    }
    out
}

pub fn opponent_passed() -> &'static str {
    "the opponent player passed\n"
}

pub fn result(result: GameResult, counts: (u8, u8)) -> String {
    let headline = match result {
        GameResult::Win => "you win!".green().bold(),
        GameResult::Lose => "you lose!".red().bold(),
        GameResult::Draw => "the game is draw".yellow().bold(),
    };
    format!(
        "\n<RESULT>\n{headline}\nBLACK: {}  WHITE: {}\n",
        counts.0, counts.1
    )
}

pub fn notice(notice: Notice) -> &'static str {
    match notice {
        Notice::InvalidPosition => "ERROR: your position is invalid.  put on another position\n",
        Notice::InvalidPass => "ERROR: your pass is invalid.  put a disc on a valid position\n",
        Notice::InvalidInput => "your input is invalid.  try again.\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_and_color_choices() {
        assert_eq!(parse_menu("1"), Some(MenuChoice::NewGame));
        assert_eq!(parse_menu(" 2 "), Some(MenuChoice::Exit));
        assert_eq!(parse_menu("3"), None);

        assert_eq!(parse_color("1"), Some(ColorChoice::Play(Color::Black)));
        assert_eq!(parse_color("2"), Some(ColorChoice::Play(Color::White)));
        assert_eq!(parse_color("3"), Some(ColorChoice::Back));
        assert_eq!(parse_color("black"), None);
    }

    #[test]
    fn parses_user_actions() {
        assert_eq!(parse_action("3,4"), Some(UserAction::Put { x: 3, y: 4 }));
        assert_eq!(parse_action(" 8 , 1 "), Some(UserAction::Put { x: 8, y: 1 }));
        assert_eq!(parse_action("0,9"), Some(UserAction::Put { x: 0, y: 9 }));
        assert_eq!(parse_action("p"), Some(UserAction::Pass));
        assert_eq!(parse_action("s"), Some(UserAction::Surrender));
        assert_eq!(parse_action("3"), None);
        assert_eq!(parse_action("a,b"), None);
        assert_eq!(parse_action("-1,2"), None);
    }

    #[test]
    fn board_lists_rows_in_coordinate_order() {
        colored::control::set_override(false);
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        grid[0][7] = Some(Color::White); // (8,1)
        grid[7][0] = Some(Color::Black); // (1,8)

        let text = board(&grid, (1, 1), Color::Black, true);

        assert!(text.contains("  1 2 3 4 5 6 7 8\n"));
        assert!(text.contains("1 - - - - - - - W\n"));
        assert!(text.contains("8 B - - - - - - -\n"));
        assert!(text.contains("this is BLACK turn"));
        assert!(text.contains("p: pass"));
    }

    #[test]
    fn opponent_turn_board_has_no_action_help() {
        colored::control::set_override(false);
        let grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        let text = board(&grid, (0, 0), Color::White, false);

        assert!(text.contains("thinking"));
        assert!(!text.contains("surrender"));
    }

    #[test]
    fn result_text_names_the_outcome() {
        colored::control::set_override(false);
        assert!(result(GameResult::Win, (40, 24)).contains("you win!"));
        assert!(result(GameResult::Lose, (24, 40)).contains("you lose!"));
        assert!(result(GameResult::Draw, (32, 32)).contains("BLACK: 32  WHITE: 32"));
    }
}
