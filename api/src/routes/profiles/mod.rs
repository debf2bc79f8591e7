//! Profile endpoints

pub mod contact;
pub mod update;

pub use contact::contact;
pub use update::update_profile;
