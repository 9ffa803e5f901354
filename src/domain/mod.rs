//! Framework-free domain contracts and entities

pub mod cache;
pub mod error;
pub mod rates;
pub mod user;

pub use error::DomainError;
