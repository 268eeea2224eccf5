//! Orientation controls for interactive views.
//!
//! Provides the arcball/trackball controller, the sphere projection and
//! arc policies it is built on, and a GPU-ready transform block for the
//! matrices it produces.

/// Arcball/trackball controller.
pub mod arcball;
/// Virtual sphere projection and rotation-between-vectors policies.
pub mod sphere;
/// Per-object transform block for uniform buffers.
pub mod uniform;

pub use arcball::Arcball;
pub use sphere::{ArcPolicy, Handedness};
pub use uniform::TransformUniform;
