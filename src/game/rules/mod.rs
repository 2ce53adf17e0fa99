//! Game rules for m,n,k-games.
//!
//! Pure functions over board snapshots. Rules are kept separate from the
//! engine so that any history step can be re-evaluated on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, WinningLine, detect_winner};
