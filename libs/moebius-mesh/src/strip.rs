//! # Möbius Strip Generation
//!
//! Generates a triangulated Möbius strip from a rectangular grid of
//! `(u, v)` samples wrapped into a closed loop.
//!
//! ## Algorithm
//!
//! 1. **Vertex placement**: sample `u` over `[0, 2π)` and `v` over
//!    `[-width/2, width/2]`, rotating the cross-section by
//!    `twist_index * u / 2` as the loop progresses
//! 2. **Interior triangulation**: split each grid quad into two
//!    triangles along a fixed diagonal
//! 3. **Seam closure**: connect the last ring back to the first, with
//!    the width axis reversed when the twist index is odd

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{
    DEFAULT_LENGTH_COUNT, DEFAULT_TWIST_INDEX, DEFAULT_WIDTH_COUNT, MAX_TRIANGLES, MAX_VERTICES,
    MIN_LENGTH_COUNT, MIN_WIDTH_COUNT, SEAM_OFFSET, STRIP_FLATNESS, STRIP_RADIUS, STRIP_SCALE,
    STRIP_WIDTH,
};
use glam::DVec3;
use std::f64::consts::PI;

/// Parameters for Möbius strip generation.
#[derive(Debug, Clone)]
pub struct StripParams {
    /// Number of discretization points along the length of the strip
    pub length_count: u32,
    /// Number of discretization points across the width of the strip (>= 2)
    pub width_count: u32,
    /// Number of half-twists applied around the strip; parity selects the
    /// seam closure pattern
    pub twist_index: i32,
    /// Width of the strip in parameter space
    pub width: f64,
    /// Radius of the strip when flattened out
    pub radius: f64,
    /// Uniform scale factor applied to all coordinates
    pub scale: f64,
    /// How flat the strip will be. Positive values result in left-turning
    /// strips, negative in right-turning ones
    pub flatness: f64,
    /// Angular displacement of the seam
    pub seam_offset: f64,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            length_count: DEFAULT_LENGTH_COUNT,
            width_count: DEFAULT_WIDTH_COUNT,
            twist_index: DEFAULT_TWIST_INDEX,
            width: STRIP_WIDTH,
            radius: STRIP_RADIUS,
            scale: STRIP_SCALE,
            flatness: STRIP_FLATNESS,
            seam_offset: SEAM_OFFSET,
        }
    }
}

impl StripParams {
    /// Creates parameters with the given resolution and twist index,
    /// keeping the default strip shape.
    pub fn with_resolution(length_count: u32, width_count: u32, twist_index: i32) -> Self {
        Self {
            length_count,
            width_count,
            twist_index,
            ..Self::default()
        }
    }
}

/// Seam connectivity, selected once from the parity of the twist index.
///
/// After an even number of half-twists the strip's cross-section returns
/// to its starting orientation, so the last ring meets the first with
/// matching width indices. After an odd number the cross-section comes
/// back flipped and the width axis must be reversed across the seam —
/// this is what makes the closed surface a Möbius identification rather
/// than a plain cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureMode {
    /// Even twist index: last-ring vertex `j` pairs with first-ring vertex `j`
    Aligned,
    /// Odd twist index: last-ring vertex `j` pairs with first-ring vertex
    /// `width_count - 1 - j`
    Reversed,
}

impl ClosureMode {
    /// Selects the closure pattern for a twist index.
    ///
    /// Works for negative indices too: `-1` and `1` both select
    /// [`ClosureMode::Reversed`].
    pub fn from_twist_index(twist_index: i32) -> Self {
        if twist_index % 2 == 0 {
            Self::Aligned
        } else {
            Self::Reversed
        }
    }
}

/// Creates a triangulated Möbius strip mesh.
///
/// Vertices are laid out ring by ring: the vertex at length index `i` and
/// width index `j` is stored at `i * width_count + j`. The grid interior
/// contributes `2 * (length_count - 1) * (width_count - 1)` triangles and
/// the seam contributes `2 * (width_count - 1)` more.
///
/// # Arguments
///
/// * `params` - Grid resolution, twist index, and strip shape
///
/// # Returns
///
/// A mesh with `length_count * width_count` vertices.
///
/// # Errors
///
/// Fails with [`MeshError::InvalidArgument`] when the resolution is below
/// the documented minimum, and with [`MeshError::TooManyVertices`] /
/// [`MeshError::TooManyTriangles`] when it exceeds the safety limits.
///
/// # Example
///
/// ```rust
/// use moebius_mesh::{create_moebius_strip, StripParams};
///
/// let mesh = create_moebius_strip(&StripParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 51 * 11);
/// ```
pub fn create_moebius_strip(params: &StripParams) -> Result<Mesh, MeshError> {
    if params.width_count < MIN_WIDTH_COUNT {
        return Err(MeshError::invalid_argument(format!(
            "Strip width count must be at least {}: {}",
            MIN_WIDTH_COUNT, params.width_count
        )));
    }

    if params.length_count < MIN_LENGTH_COUNT {
        return Err(MeshError::invalid_argument(format!(
            "Strip length count must be at least {}: {}",
            MIN_LENGTH_COUNT, params.length_count
        )));
    }

    let nl = params.length_count as usize;
    let nw = params.width_count as usize;

    let vertex_count = nl * nw;
    let triangle_count = 2 * (nl - 1) * (nw - 1) + 2 * (nw - 1);

    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }

    if triangle_count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    // Create the vertices. This is based on the parameterization of the
    // Möbius strip as given in
    // <https://en.wikipedia.org/wiki/M%C3%B6bius_strip#Geometry_and_topology>
    let half_width = 0.5 * params.width;

    for i in 0..nl {
        // The sample at u = 2*PI is excluded; the seam identifies it with u = 0.
        let u = 2.0 * PI * i as f64 / nl as f64;

        // Cross-section rotation for this ring. One half-turn per unit of
        // twist index over the full loop.
        let alpha = params.twist_index as f64 * (0.5 * u) + params.seam_offset;
        let cos_alpha = alpha.cos();
        let sin_alpha = alpha.sin();
        let cos_u = u.cos();
        let sin_u = u.sin();

        for j in 0..nw {
            // v spans [-width/2, width/2] inclusive of both ends.
            let v = -half_width + params.width * j as f64 / (nw - 1) as f64;

            mesh.add_vertex(DVec3::new(
                params.scale * (params.radius + v * cos_alpha) * cos_u,
                params.scale * (params.radius + v * cos_alpha) * sin_u,
                params.flatness * params.scale * v * sin_alpha,
            ));
        }
    }

    // Fill the grid interior: two triangles per quad, split along the
    // diagonal from (i, j) to (i+1, j+1). The split is fixed, not adaptive.
    for i in 0..nl - 1 {
        for j in 0..nw - 1 {
            let a = (i * nw + j) as u32;
            let b = ((i + 1) * nw + j) as u32;
            let c = (i * nw + j + 1) as u32;
            let d = ((i + 1) * nw + j + 1) as u32;

            mesh.add_triangle(a, d, c);
            mesh.add_triangle(a, b, d);
        }
    }

    // Close the geometry: connect the last ring back to the first.
    let last = (nl - 1) * nw;
    match ClosureMode::from_twist_index(params.twist_index) {
        ClosureMode::Aligned => {
            // Even Möbius fold: close the geometry upside up.
            for j in 0..nw - 1 {
                mesh.add_triangle((last + j) as u32, (j + 1) as u32, (last + j + 1) as u32);
                mesh.add_triangle((last + j) as u32, j as u32, (j + 1) as u32);
            }
        }
        ClosureMode::Reversed => {
            // Odd Möbius fold: close the geometry upside down, reflecting
            // the width axis.
            for j in 0..nw - 1 {
                mesh.add_triangle(
                    (last + j) as u32,
                    ((nw - 1) - (j + 1)) as u32,
                    (last + j + 1) as u32,
                );
                mesh.add_triangle(
                    (last + j) as u32,
                    ((nw - 1) - j) as u32,
                    ((nw - 1) - (j + 1)) as u32,
                );
            }
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    /// Expected total cell count for a given resolution.
    fn expected_triangles(nl: usize, nw: usize) -> usize {
        2 * (nl - 1) * (nw - 1) + 2 * (nw - 1)
    }

    /// The seam triangles are always emitted last.
    fn seam_triangles(mesh: &Mesh, nw: usize) -> Vec<[u32; 3]> {
        let seam = 2 * (nw - 1);
        mesh.triangles()[mesh.triangle_count() - seam..].to_vec()
    }

    #[test]
    fn test_moebius_default_counts() {
        let mesh = create_moebius_strip(&StripParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 51 * 11);
        assert_eq!(mesh.triangle_count(), expected_triangles(51, 11));
    }

    #[test]
    fn test_moebius_counts_across_resolutions() {
        for (nl, nw, index) in [(2, 2, 0), (4, 3, 1), (10, 5, 3), (33, 7, -2)] {
            let params = StripParams::with_resolution(nl, nw, index);
            let mesh = create_moebius_strip(&params).unwrap();
            assert_eq!(mesh.vertex_count(), (nl * nw) as usize);
            assert_eq!(
                mesh.triangle_count(),
                expected_triangles(nl as usize, nw as usize)
            );
        }
    }

    #[test]
    fn test_moebius_indices_in_range() {
        let params = StripParams::with_resolution(13, 5, 1);
        let mesh = create_moebius_strip(&params).unwrap();
        let vertex_count = mesh.vertex_count() as u32;
        for tri in mesh.triangles() {
            for &idx in tri {
                assert!(idx < vertex_count);
            }
        }
    }

    #[test]
    fn test_moebius_validates() {
        let mesh = create_moebius_strip(&StripParams::default()).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_zero_twist_is_flat_cylinder() {
        let params = StripParams::with_resolution(16, 4, 0);
        let mesh = create_moebius_strip(&params).unwrap();

        // With no cross-section rotation the strip stays in the z = 0 plane
        // and every ring carries the same radial distance pattern.
        let nw = 4usize;
        for (idx, v) in mesh.vertices().iter().enumerate() {
            assert_eq!(v.z, 0.0);

            let j = idx % nw;
            let offset = -0.5 + j as f64 / (nw - 1) as f64;
            let expected = params.scale * (params.radius + offset);
            let radial = (v.x * v.x + v.y * v.y).sqrt();
            assert!((radial - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_closure_mode_parity() {
        assert_eq!(ClosureMode::from_twist_index(0), ClosureMode::Aligned);
        assert_eq!(ClosureMode::from_twist_index(2), ClosureMode::Aligned);
        assert_eq!(ClosureMode::from_twist_index(-4), ClosureMode::Aligned);
        assert_eq!(ClosureMode::from_twist_index(1), ClosureMode::Reversed);
        assert_eq!(ClosureMode::from_twist_index(3), ClosureMode::Reversed);
        assert_eq!(ClosureMode::from_twist_index(-1), ClosureMode::Reversed);
    }

    #[test]
    fn test_seam_triples_odd_twist() {
        // lengthCount=4, widthCount=3, twistIndex=1: last[j] = 9 + j,
        // rev(j) = 2 - j.
        let params = StripParams::with_resolution(4, 3, 1);
        let mesh = create_moebius_strip(&params).unwrap();

        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 16);

        let seam = seam_triangles(&mesh, 3);
        assert_eq!(seam, vec![[9, 1, 10], [9, 2, 1], [10, 0, 11], [10, 1, 0]]);
    }

    #[test]
    fn test_seam_triples_even_twist() {
        // Same resolution, twistIndex=2: the seam uses first[j] = j directly.
        let params = StripParams::with_resolution(4, 3, 2);
        let mesh = create_moebius_strip(&params).unwrap();

        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 16);

        let seam = seam_triangles(&mesh, 3);
        assert_eq!(seam, vec![[9, 1, 10], [9, 0, 1], [10, 2, 11], [10, 1, 2]]);
    }

    #[test]
    fn test_seam_pairing_by_parity() {
        // For each seam quad the first triangle pairs last[j] with the
        // matching (even) or reflected (odd) first-ring index.
        for index in [1, 2, 3, -1] {
            let nl = 8u32;
            let nw = 5u32;
            let params = StripParams::with_resolution(nl, nw, index);
            let mesh = create_moebius_strip(&params).unwrap();

            let seam = seam_triangles(&mesh, nw as usize);
            let last = (nl - 1) * nw;

            for j in 0..nw - 1 {
                let expected_partner = match ClosureMode::from_twist_index(index) {
                    ClosureMode::Aligned => j + 1,
                    ClosureMode::Reversed => (nw - 1) - (j + 1),
                };
                assert_eq!(
                    seam[2 * j as usize],
                    [last + j, expected_partner, last + j + 1],
                    "index {index}, seam quad {j}"
                );
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = StripParams::with_resolution(21, 9, 3);
        let first = create_moebius_strip(&params).unwrap();
        let second = create_moebius_strip(&params).unwrap();

        assert_eq!(first.vertices(), second.vertices());
        assert_eq!(first.triangles(), second.triangles());
    }

    #[test]
    fn test_vertices_within_bounding_sphere() {
        let params = StripParams::default();
        let mesh = create_moebius_strip(&params).unwrap();

        let bound = params.scale * (params.radius + 0.5 * params.width);
        for v in mesh.vertices() {
            assert!(v.length() <= bound + EPSILON);
        }
    }

    #[test]
    fn test_negative_flatness_mirrors_z() {
        let mut params = StripParams::with_resolution(12, 5, 1);
        let left = create_moebius_strip(&params).unwrap();
        params.flatness = -params.flatness;
        let right = create_moebius_strip(&params).unwrap();

        for (a, b) in left.vertices().iter().zip(right.vertices()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, -b.z);
        }
        // Topology is unaffected by the handedness flip.
        assert_eq!(left.triangles(), right.triangles());
    }

    #[test]
    fn test_minimal_length_count() {
        // A single ring is permitted; the seam stitches it to itself.
        let params = StripParams::with_resolution(1, 3, 1);
        let mesh = create_moebius_strip(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn test_invalid_width_count() {
        let params = StripParams::with_resolution(10, 1, 1);
        let result = create_moebius_strip(&params);
        assert!(matches!(result, Err(MeshError::InvalidArgument { .. })));
    }

    #[test]
    fn test_invalid_length_count() {
        let params = StripParams::with_resolution(0, 5, 1);
        let result = create_moebius_strip(&params);
        assert!(matches!(result, Err(MeshError::InvalidArgument { .. })));
    }

    #[test]
    fn test_too_many_vertices() {
        let params = StripParams::with_resolution(200_000, 200, 1);
        let result = create_moebius_strip(&params);
        assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
    }
}
