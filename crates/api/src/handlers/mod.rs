//! HTTP handlers, one module per resource.

pub mod appointments;
pub mod blog;
pub mod categories;
pub mod chat;
pub mod events;
pub mod leads;
pub mod products;
pub mod stats;
pub mod uploads;
