//! Validation of identity tokens issued by the external provider.

pub mod jwt;
