//! Contact gate: reveals a profile's contact details to verified viewers only.

mod service;

#[cfg(test)]
mod tests;

pub use service::ContactService;
