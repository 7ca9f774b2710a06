//! Domain logic shared by the persistence and API layers.
//!
//! This crate has no internal dependencies so its decision functions (admin
//! policy, image fallback, category-count merge, chat bot) can be unit
//! tested without a database or HTTP stack.

pub mod admin;
pub mod chat_bot;
pub mod error;
pub mod media;
pub mod stats;
pub mod types;
