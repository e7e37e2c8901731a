//! Help line module
//!
//! Key hints shown at the bottom of the screen.

pub mod help_line_render;
