//! User profile entity and repository contract

pub mod entity;
pub mod repository;

pub use entity::UserProfile;
pub use repository::UserRepository;
