//! Command implementations.

pub mod evaluate;
pub mod evidence;
pub mod notes;

pub use self::evaluate::execute_evaluate;
pub use self::evidence::{execute_clue, execute_reset, parse_clue_token, ClueInput};
pub use self::notes::{execute_about, execute_ghosts, execute_possible_ghosts, execute_questions};
