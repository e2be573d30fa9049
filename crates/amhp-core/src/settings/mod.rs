//! Settings domain module.
//!
//! - `model`: [`Settings`] and its enumerated fields
//! - `manager`: [`SettingsManager`], which loads, validates and persists

mod manager;
mod model;

pub use manager::SettingsManager;
pub use model::{SettingKey, Settings, TextSize, Theme};
