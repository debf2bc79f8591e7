//! MySQL repository implementations

pub mod profile_repository_impl;

pub use profile_repository_impl::MySqlProfileRepository;
