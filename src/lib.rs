//! Public library API for converting plain text into typed Rust values.

/// Destination resolution, conversion dispatch, and kind introspection.
pub mod coerce;
