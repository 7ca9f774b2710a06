//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod appointment_repo;
pub mod blog_post_repo;
pub mod category_repo;
pub mod chat_repo;
pub mod event_repo;
pub mod lead_repo;
pub mod product_repo;
pub mod stats_repo;

pub use appointment_repo::AppointmentRepo;
pub use blog_post_repo::BlogPostRepo;
pub use category_repo::CategoryRepo;
pub use chat_repo::ChatRepo;
pub use event_repo::EventRepo;
pub use lead_repo::LeadRepo;
pub use product_repo::ProductRepo;
pub use stats_repo::StatsRepo;
