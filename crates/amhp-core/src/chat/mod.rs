//! Chat domain module.
//!
//! - `message`: chat records and the append-only [`Conversation`]
//! - `responder`: keyword classification and canned reply selection

mod message;
mod responder;

pub use message::{ChatMessage, Conversation, Sender};
pub use responder::{DEFAULT_RULES, KeywordRule, Reply, Responder, ResponseCategory};
