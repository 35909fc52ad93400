//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so strategies and the match controller share one definition.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{GameOutcome, outcome};
pub use win::{WIN_COMBINATIONS, has_won};
