//! Ambient 3D backdrop rendered behind the page content.
//!
//! Camera, lighting, starfield, the trophy point cloud, and the firework
//! particle pool. Everything here animates on the frame clock and takes no
//! user input beyond the scroll-linked rig.

/// Camera, lighting, and the drifting starfield.
pub mod backdrop;

/// Fixed-pool firework particles with in-place respawn.
pub mod particles;

/// Parametric trophy silhouette and its scroll-linked rig.
pub mod trophy;
