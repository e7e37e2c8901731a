//! omnibar: terminal search box with live suggestions and query history.
//!
//! A single-line search field wired to a remote suggestion service:
//! matches pop up above the field as you type, Enter submits the query,
//! and the service-owned history fills the rest of the screen.

pub mod app;
pub mod cli;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod help;
pub mod history;
pub mod input;
pub mod layout;
pub mod service;
pub mod theme;
pub mod widgets;
