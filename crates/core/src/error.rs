/// Public message for requests with no resolved identity.
pub const MSG_NOT_AUTHENTICATED: &str = "not authenticated, please log in";

/// Public message for authenticated callers outside the admin allow-list.
pub const MSG_RESTRICTED: &str = "restricted access";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the record's id, or its slug for slug-addressed lookups.
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A structural violation caught before the store is touched, e.g. a
    /// client-supplied chat message claiming the bot sender.
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found for a record addressed by id or slug.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
