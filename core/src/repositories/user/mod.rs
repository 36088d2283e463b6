//! User repository: persistence interface plus the in-memory implementation
//! the platform actually runs on.

mod memory;
mod repository;

pub use memory::InMemoryUserRepository;
pub use repository::UserRepository;
