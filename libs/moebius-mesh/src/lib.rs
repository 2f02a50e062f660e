//! # Moebius Mesh
//!
//! Triangulated Möbius strip generation.
//!
//! A rectangular grid of `(u, v)` samples is wrapped into a closed strip:
//! `u` runs around the loop, `v` across the width, and the cross-section
//! rotates by half a turn per unit of twist index. The seam that closes
//! the loop reverses the width axis when the twist index is odd, which is
//! what makes the surface non-orientable.
//!
//! ## Architecture
//!
//! ```text
//! StripParams → create_moebius_strip → Mesh (vertices + triangles)
//! ```
//!
//! The crate knows nothing about file formats; serialization lives in the
//! `moebius-io` collaborator.
//!
//! ## Usage
//!
//! ```rust
//! use moebius_mesh::{create_moebius_strip, StripParams};
//!
//! let mesh = create_moebius_strip(&StripParams::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 51 * 11);
//! ```

pub mod error;
pub mod mesh;
pub mod strip;

pub use error::MeshError;
pub use mesh::Mesh;
pub use strip::{create_moebius_strip, ClosureMode, StripParams};
