//! Domain layer containing the course data model and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Persisted data structures (`Course`, `Lesson`, `Category`)
//! - [`pagination`] - Page requests and page results returned by stores
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented in [`crate::infrastructure`].

pub mod entities;
pub mod pagination;
pub mod repositories;
