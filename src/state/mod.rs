//! Application state module

mod app_state;
mod dropdown;
mod forms;

pub use app_state::*;
pub use dropdown::*;
pub use forms::*;
