//! HTTP surface of the OxTickets backend
//!
//! Exposes the application factories, middleware and handlers used by the
//! `ot_api` and `ot_mailer` binaries and by the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, create_mailer_app};
pub use routes::health::HealthState;
pub use routes::mailer::MailerState;
pub use routes::AppState;
