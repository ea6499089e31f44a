//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the classifier can compose them.

pub mod draw;
pub mod threat;
pub mod win;

pub use draw::is_full;
pub use threat::has_immediate_win;
pub use win::{LINES, check_winner};
