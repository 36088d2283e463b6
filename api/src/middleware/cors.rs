//! CORS configuration
//!
//! The API is consumed by a browser SPA served from arbitrary dev hosts, so
//! CORS is permissive.

use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::permissive()
}
