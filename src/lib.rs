//! Close Contacts - proximity query service over a contact store
//!
//! Given a reference point, a radius and an optional gender allow-list, the
//! service scans a snapshot of all contacts and returns those within the
//! radius, each with its Euclidean distance.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{planar_distance, ProximityFilter};
pub use error::{DataIntegrityGap, ProximityError, SourceError};
pub use models::{Contact, Envelope, Gender, GenderFilter, QueryRequest, QueryResult, ResultOrder};
pub use services::{CloseContactService, ContactSource, InMemoryContactStore};
