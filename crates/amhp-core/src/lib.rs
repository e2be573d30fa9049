pub mod action;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod journal;
pub mod mood;
pub mod navigation;
pub mod settings;
pub mod speech;
pub mod store;
pub mod user;

// Re-export common error type
pub use error::{AmhpError, Result};
