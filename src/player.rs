use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::game::Game;
use crate::types::{Color, Position, ValidMove};

/// Game handle shared by both sides of a match.
pub type SharedGame = Rc<RefCell<Game>>;

pub fn shared_game() -> SharedGame {
    Rc::new(RefCell::new(Game::new()))
}

/// Chooses one square out of the legal moves offered for this turn.
pub trait MoveSelector {
    fn select_move(&self, valid: &[ValidMove]) -> Option<Position>;
}

/// Takes the move that turns over the most discs; the earliest square in
/// enumeration order wins ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, valid: &[ValidMove]) -> Option<Position> {
        let mut best: Option<&ValidMove> = None;
        for candidate in valid {
            if best.is_none_or(|b| candidate.flip_count > b.flip_count) {
                best = Some(candidate);
            }
        }
        best.map(|m| m.position)
    }
}

/// Binds a color to the shared game.
#[derive(Debug, Clone)]
pub struct Player {
    game: SharedGame,
    color: Color,
}

impl Player {
    pub fn new(game: SharedGame, color: Color) -> Self {
        Self { game, color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn put_disc(&self, pos: Position) -> bool {
        self.game.borrow_mut().put_disc(pos, self.color)
    }

    pub fn take_pass(&self) -> bool {
        self.game.borrow_mut().take_pass(self.color)
    }

    pub fn surrender(&self, is_user: bool) -> bool {
        self.game.borrow_mut().surrender(is_user)
    }
}

/// Computer side. Routes its moves through a [`Player`] so they go through
/// the same validation as the user's.
pub struct Opponent {
    game: SharedGame,
    player: Player,
    selector: Box<dyn MoveSelector>,
}

impl Opponent {
    pub fn new(game: SharedGame, color: Color) -> Self {
        Self::with_selector(game, color, Box::new(GreedySelector))
    }

    pub fn with_selector(game: SharedGame, color: Color, selector: Box<dyn MoveSelector>) -> Self {
        let player = Player::new(Rc::clone(&game), color);
        Self {
            game,
            player,
            selector,
        }
    }

    pub fn color(&self) -> Color {
        self.player.color()
    }

    /// Plays one turn. Returns `true` when a disc was placed and `false`
    /// when the opponent had to pass.
    ///
    /// # Panics
    /// Panics if the selector returns a square the game then refuses; the
    /// selector only ever sees squares the game itself reported as legal.
    pub fn make_move(&self) -> bool {
        let valid = self.game.borrow().get_valid(self.color());
        let Some(pos) = self.selector.select_move(&valid) else {
            debug!(color = self.color().name(), "opponent has no legal move");
            self.player.take_pass();
            return false;
        };

        let placed = self.player.put_disc(pos);
        assert!(
            placed,
            "opponent selected an illegal move at ({}, {})",
            pos.x(),
            pos.y()
        );
        debug!(x = pos.x(), y = pos.y(), "opponent placed a disc");
        true
    }
}
