//! # tt-core
//!
//! Core types, traits, and utilities for TicketTrack RS.
//!
//! This crate provides the foundational building blocks used across all
//! other crates:
//! - The ticket operation error taxonomy
//! - Result type aliases
//! - Core traits (Entity, Identifiable, Timestamped)
//! - Configuration types

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::*;
pub use error::*;
pub use result::*;
pub use traits::*;
