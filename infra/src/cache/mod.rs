//! Cache module for Redis-backed storage
//!
//! Pending verification records live in Redis hashes so the attempt counter
//! can be merged without rewriting the rest of the record.

pub mod redis_client;
pub mod verification_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use verification_store::RedisVerificationRepository;

// Re-export commonly used types
pub use ot_shared::config::CacheConfig;
