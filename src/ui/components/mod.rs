//! Reusable UI components

mod button;
mod dropdown;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dropdown::render_dropdown;
