pub mod dropdown_render;
mod dropdown_state;

pub use dropdown_state::{DropdownState, Suggestion};
