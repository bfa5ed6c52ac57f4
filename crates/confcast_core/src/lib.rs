//! Public library API for decoding flat remote config stores into typed records.

/// Store contract, schema descriptors, value coercion, and record decoding.
pub mod remote;
