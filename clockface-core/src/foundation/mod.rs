/// Colour values shared by configs and renderers.
pub mod color;
/// Frame-rate, index and canvas primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
