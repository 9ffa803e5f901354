//! Infrastructure adapters behind the domain contracts

pub mod cache;
pub mod logging;
pub mod rates;
pub mod user;
