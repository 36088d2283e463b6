//! Library exports for integration tests and external wiring.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
