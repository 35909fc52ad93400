//! Human player that types coordinates at the console.

use super::{PlayerKind, Strategy};
use crate::console::Console;
use crate::error::StrategyError;
use crate::position::Coordinates;
use crate::types::{Board, Player};
use tracing::{debug, instrument, warn};

/// Prompt shown before each read.
pub const COORDINATES_PROMPT: &str = "Enter the coordinates: ";

/// Reply to a cell that already holds a tile.
pub const OCCUPIED_MESSAGE: &str = "This cell is occupied! Choose another one!";

/// Human player reading `x y` coordinates from a [`Console`].
///
/// Bad input is reported and asked for again; only end of input or a read
/// failure ends the turn with an error.
#[derive(Debug)]
pub struct HumanStrategy<C> {
    console: C,
}

impl<C: Console> HumanStrategy<C> {
    /// Creates a human player bound to `console`.
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Strategy for HumanStrategy<C> {
    #[instrument(skip(self, board, _opponent))]
    fn choose_move(
        &mut self,
        board: &Board,
        tile: Player,
        _opponent: Player,
    ) -> Result<usize, StrategyError> {
        loop {
            let Some(line) = self.console.read_line(COORDINATES_PROMPT)? else {
                warn!("Input closed while waiting for a move");
                return Err(StrategyError::InputClosed);
            };

            let coordinates = match line.parse::<Coordinates>() {
                Ok(coordinates) => coordinates,
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected coordinates");
                    self.console.say(&e.to_string());
                    continue;
                }
            };

            let index = coordinates.to_index();
            if !board.is_empty(index) {
                debug!(%coordinates, index, "Cell occupied");
                self.console.say(OCCUPIED_MESSAGE);
                continue;
            }

            debug!(%coordinates, index, "Human chose cell");
            return Ok(index);
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::User
    }
}
