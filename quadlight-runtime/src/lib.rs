//! Backend independent state of the quadlight demo.
//!
//! Nothing in here touches a graphics API. A backend uploads [`geometry::QUAD_VERTICES`]
//! once and the blocks from [`scene::Scene`] every frame.

/// Vertex layout and the quad mesh.
pub mod geometry;

/// Constant buffer layouts.
pub mod uniforms;

/// Camera and projection.
pub mod camera;

/// Frame limiting and the rotation animation.
pub mod animation;

/// Demo configuration.
pub mod options;

/// Per-frame scene state.
pub mod scene;
