//! Navigation domain module.
//!
//! - `screen`: the fixed set of screens and their entry effects
//! - `navigator`: the state machine and keyboard shortcuts

mod navigator;
mod screen;

pub use navigator::{KeyInput, Navigator, Transition};
pub use screen::{Screen, ScreenEffect};
