//! Back-office authorization policy.
//!
//! The entire privileged surface is gated by one allow-list of admin email
//! addresses, loaded from the environment by the API layer. The list lives
//! server-side only and is never exported to client-reachable code.

/// Decides which authenticated identities may perform privileged operations.
///
/// Comparison is case-insensitive on the email claim as issued by the
/// identity provider.
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl AdminPolicy {
    /// Build a policy from raw entries. Entries are trimmed and lowercased;
    /// empty entries are discarded.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// Parse a comma-separated allow-list, the `ADMIN_EMAILS` format.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// An empty policy admits nobody.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Whether the given email is on the allow-list.
    pub fn is_admin(&self, email: &str) -> bool {
        let needle = email.trim().to_lowercase();
        self.emails.iter().any(|e| *e == needle)
    }
}
