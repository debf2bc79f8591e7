pub mod profile;
pub mod verification;

pub use profile::{InMemoryProfileRepository, ProfileRepository};
pub use verification::{InMemoryVerificationRepository, VerificationRecordRepository};
