//! Application layer: owns the running state and turns actions into events.
//!
//! - `app`: the [`AmhpApp`] handle and action dispatch
//! - `handlers`: per-feature action handlers
//! - `scheduler`: cancellable delayed tasks
//! - `reply_queue`: FIFO assistant reply delivery
//! - `snapshot`: read-only state for rendering

mod app;
mod handlers;
pub mod reply_queue;
pub mod scheduler;
pub mod snapshot;
pub mod state;

pub use app::AmhpApp;
pub use handlers::CRISIS_ANNOUNCEMENT;
pub use scheduler::{ScheduledTask, Scheduler};
pub use snapshot::AppSnapshot;
