//! Verification record repository module.

mod r#trait;
pub use r#trait::VerificationRecordRepository;

mod memory;
pub use memory::InMemoryVerificationRepository;

#[cfg(test)]
mod tests;
