//! Server-side chat machinery: the bot responder task.

pub mod responder;
