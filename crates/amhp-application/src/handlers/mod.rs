//! Action handlers, one module per feature area.
//!
//! Each module adds an `impl AmhpApp` block; [`AmhpApp::dispatch`] routes
//! actions to these methods.
//!
//! [`AmhpApp::dispatch`]: crate::AmhpApp::dispatch

mod chat;
mod journal;
mod mood;
mod navigation;
mod resources;
mod session;
mod settings;
mod voice;

pub use navigation::CRISIS_ANNOUNCEMENT;
