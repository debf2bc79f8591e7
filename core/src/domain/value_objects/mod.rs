//! Value objects representing immutable domain concepts.

pub mod email;
pub mod identity;

// Re-export commonly used types
pub use email::InstitutionalEmail;
pub use identity::CallerIdentity;
