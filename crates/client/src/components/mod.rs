//! Reusable UI components.

pub mod game;
pub mod ui;
