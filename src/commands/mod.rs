//! Command implementations

pub mod list;
pub mod play;
pub mod turn;

pub use list::{run_list, sorted_solutions};
pub use play::run_play;
pub use turn::{show_turn, submit, submit_educated, submit_new};
