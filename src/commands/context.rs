//! Everything an interactive shell needs to run games

use crate::core::{Board, BoardError};
use crate::dictionary::DictionaryOracle;
use crate::game::GameSession;
use crate::generator::{BoardGenerator, GenerationError};
use rand::rngs::StdRng;
use std::sync::Arc;

/// A session plus the means to replace its board and check its words
pub struct GameContext<O> {
    pub session: GameSession,
    pub generator: BoardGenerator,
    pub oracle: Arc<O>,
    pub rng: StdRng,
}

impl<O: DictionaryOracle> GameContext<O> {
    #[must_use]
    pub const fn new(
        session: GameSession,
        generator: BoardGenerator,
        oracle: Arc<O>,
        rng: StdRng,
    ) -> Self {
        Self {
            session,
            generator,
            oracle,
            rng,
        }
    }

    /// Start over on a new random board
    ///
    /// # Errors
    /// Returns the generator's error; the current game is kept.
    pub fn restart(&mut self) -> Result<(), GenerationError> {
        self.session.restart(&self.generator, &mut self.rng)
    }

    /// Start over on a board given as text, e.g. `ATE-MPS-RON-CID`
    ///
    /// # Errors
    /// Returns `BoardError` for malformed or invalid letters; the current game
    /// is kept.
    pub fn load_letters(&mut self, text: &str) -> Result<(), BoardError> {
        let board = Board::parse(text, &self.generator.config().board_rules())?;
        self.session.set_board(board);
        Ok(())
    }
}
