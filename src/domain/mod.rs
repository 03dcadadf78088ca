//! Domain layer - Core business logic
//!
//! Entities, repository traits and the pure byte-level services. Nothing in
//! here performs I/O.

pub mod entities;
pub mod repositories;
pub mod services;
