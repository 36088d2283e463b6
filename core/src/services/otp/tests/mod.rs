//! Tests for the OTP workflow

mod service_tests;
mod store_tests;
