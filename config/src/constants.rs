//! # Configuration Constants
//!
//! Centralized constants for the Möbius mesh pipeline. The strip shape
//! parameters, discretization defaults, precision values, and safety
//! limits are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Strip Shape**: Fixed geometric parameters of the strip
//! - **Resolution**: Default discretization parameters
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and as the minimum area below which a triangle
/// counts as degenerate during mesh validation.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// STRIP SHAPE CONSTANTS
// =============================================================================

/// Width of the strip in parameter space.
///
/// The cross-section parameter `v` ranges over `[-STRIP_WIDTH / 2,
/// STRIP_WIDTH / 2]`.
pub const STRIP_WIDTH: f64 = 1.0;

/// Radius of the strip when flattened out.
pub const STRIP_RADIUS: f64 = 1.0;

/// Uniform scale factor applied to all vertex coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::{STRIP_RADIUS, STRIP_SCALE, STRIP_WIDTH};
///
/// // All generated vertices fit inside this bounding-sphere radius.
/// let bound = STRIP_SCALE * (STRIP_RADIUS + STRIP_WIDTH / 2.0);
/// assert_eq!(bound, 15.0);
/// ```
pub const STRIP_SCALE: f64 = 10.0;

/// How flat the strip will be.
///
/// Positive values result in left-turning Möbius strips, negative in
/// right-turning ones. Also influences the width of the strip. The sign
/// changes the handedness of the visual twist, not the topology.
pub const STRIP_FLATNESS: f64 = 1.0;

/// Angular displacement of the seam.
///
/// Added to the cross-section rotation angle of every ring, rotating
/// where around the loop the twist is anchored.
pub const SEAM_OFFSET: f64 = 0.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of discretization points along the length of the strip.
pub const DEFAULT_LENGTH_COUNT: u32 = 51;

/// Default number of discretization points across the width of the strip.
pub const DEFAULT_WIDTH_COUNT: u32 = 11;

/// Default number of half-twists applied around the strip.
///
/// One half-twist produces the classic single-sided Möbius strip.
pub const DEFAULT_TWIST_INDEX: i32 = 1;

/// Minimum number of points along the length of the strip.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_LENGTH_COUNT;
///
/// let requested = 0u32;
/// assert!(requested < MIN_LENGTH_COUNT);
/// ```
pub const MIN_LENGTH_COUNT: u32 = 1;

/// Minimum number of points across the width of the strip.
///
/// A strip needs at least two points across its width to form triangles.
pub const MIN_WIDTH_COUNT: u32 = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
pub const MAX_TRIANGLES: usize = 10_000_000;
