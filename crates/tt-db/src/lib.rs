//! # tt-db
//!
//! Persistence layer for TicketTrack RS.
//!
//! This crate defines the repository contract the ticket services consume
//! and provides the PostgreSQL implementation using SQLx:
//!
//! - Connection pool management
//! - `TicketRepository` trait with include-parameterized loading
//! - Entity mappings for projects, tickets, and users
//!
//! ## Example
//!
//! ```ignore
//! use tt_db::{Database, DatabaseConfig, PgTicketRepository, TicketInclude, TicketRepository};
//!
//! let config = DatabaseConfig::from_env();
//! let db = Database::connect(&config).await?;
//!
//! let repo = PgTicketRepository::new(db.pool().clone());
//! let ticket = repo.ticket(1, TicketInclude::owners()).await?;
//! ```

pub mod pool;
pub mod projects;
pub mod repository;
pub mod tickets;
pub mod users;

pub use pool::{Database, DatabaseConfig};
pub use repository::{RepositoryError, RepositoryResult, TicketInclude, TicketRepository};
pub use tickets::PgTicketRepository;
