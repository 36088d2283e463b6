//! # JobLink Core
//!
//! Core business logic and domain layer for the JobLink backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. It performs no I/O of its own: email
//! delivery lives behind the [`services::otp::Notifier`] trait implemented
//! by the `jl_infra` crate, and HTTP handling lives in `jl_api`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
