//! Shared utilities: the crate-wide error taxonomy.

pub mod errors;

pub use errors::TrackError;
