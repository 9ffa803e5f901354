//! Endpoint handlers

pub mod greeting;
pub mod rates;
pub mod users;
