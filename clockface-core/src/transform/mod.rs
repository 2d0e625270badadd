//! Precomputed transforms.

/// Rotation tables for one full revolution.
pub mod rotation;
