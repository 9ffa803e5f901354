//! User store adapters

pub mod postgres_repository;

pub use postgres_repository::PostgresUserRepository;
