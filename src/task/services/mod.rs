//! Application services for the task board.

mod board;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
