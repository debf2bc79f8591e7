//! Domain entities representing core business objects.

pub mod profile;
pub mod verification_record;

// Re-export commonly used types
pub use profile::{ContactCard, ContactDetails, ProfileVerificationState, UserProfile};
pub use verification_record::{
    VerificationRecord, VerificationState, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS,
};
