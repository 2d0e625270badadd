//! Frame buffers and the 3D drawing surface.
//!
//! [`surface::DrawSurface`] is the seam between the overlay loop and a rasterizer. The bundled
//! [`surface::SoftwareSurface`] renders on the CPU so no window or GPU context is needed.

/// Opaque RGB output frames.
pub mod frame;
/// Drawing surface trait and CPU rasterizer.
pub mod surface;
