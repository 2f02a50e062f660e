//! # Moebius IO
//!
//! Mesh file serialization for the Möbius pipeline.
//!
//! The interface mirrors the shape of the data the generator produces: an
//! ordered sequence of points plus named cell blocks, each block pairing a
//! cell-type name with index triples. The only cell type the writers
//! accept is `"triangle"`.
//!
//! The output format is chosen from the filename extension:
//!
//! | Extension | Format     |
//! |-----------|------------|
//! | `.obj`    | ASCII OBJ  |
//! | `.stl`    | binary STL |
//! | `.stla`   | ASCII STL  |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glam::DVec3;
//! use moebius_io::CellBlock;
//!
//! let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
//! let blocks = [CellBlock::triangles(vec![[0, 1, 2]])];
//! moebius_io::write_mesh("triangle.obj", &points, &blocks)?;
//! # Ok::<(), moebius_io::WriteError>(())
//! ```

pub mod error;
pub mod obj;
pub mod stl;

pub use error::WriteError;

use glam::DVec3;
use std::path::Path;

/// Cell-type name for triangle blocks, the only type the writers accept.
pub const TRIANGLE_CELL_TYPE: &str = "triangle";

/// A named block of cells sharing one cell type.
#[derive(Debug, Clone)]
pub struct CellBlock {
    /// Cell-type name (e.g. `"triangle"`)
    pub cell_type: String,
    /// Vertex-index triples
    pub cells: Vec<[u32; 3]>,
}

impl CellBlock {
    /// Creates a cell block with an explicit cell-type name.
    pub fn new(cell_type: impl Into<String>, cells: Vec<[u32; 3]>) -> Self {
        Self {
            cell_type: cell_type.into(),
            cells,
        }
    }

    /// Creates a `"triangle"` cell block.
    pub fn triangles(cells: Vec<[u32; 3]>) -> Self {
        Self::new(TRIANGLE_CELL_TYPE, cells)
    }
}

/// Output format for a mesh file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// ASCII Wavefront OBJ
    Obj,
    /// Binary STL
    StlBinary,
    /// ASCII STL
    StlAscii,
}

impl MeshFormat {
    /// Determines the output format from a file extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moebius_io::MeshFormat;
    /// use std::path::Path;
    ///
    /// let format = MeshFormat::from_path(Path::new("strip.stl")).unwrap();
    /// assert_eq!(format, MeshFormat::StlBinary);
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, WriteError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "obj" => Ok(Self::Obj),
            "stl" => Ok(Self::StlBinary),
            "stla" => Ok(Self::StlAscii),
            _ => Err(WriteError::UnsupportedFormat { extension }),
        }
    }
}

/// Writes points and cell blocks to a mesh file.
///
/// The format is chosen from the filename extension. Cell blocks are
/// validated before any bytes are written: every block must be of type
/// `"triangle"` and every index must reference an existing point.
///
/// # Arguments
///
/// * `path` - File to be written to
/// * `points` - Ordered vertex positions
/// * `cell_blocks` - Named cell blocks referencing the points by index
pub fn write_mesh<P: AsRef<Path>>(
    path: P,
    points: &[DVec3],
    cell_blocks: &[CellBlock],
) -> Result<(), WriteError> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path)?;
    write_mesh_as(format, path, points, cell_blocks)
}

/// Writes points and cell blocks in an explicit format, ignoring the
/// filename extension.
pub fn write_mesh_as<P: AsRef<Path>>(
    format: MeshFormat,
    path: P,
    points: &[DVec3],
    cell_blocks: &[CellBlock],
) -> Result<(), WriteError> {
    validate_blocks(points, cell_blocks)?;

    match format {
        MeshFormat::Obj => obj::write_obj(path, points, cell_blocks),
        MeshFormat::StlBinary => stl::write_stl_binary(path, points, cell_blocks),
        MeshFormat::StlAscii => stl::write_stl_ascii(path, points, cell_blocks),
    }
}

/// Rejects cell blocks the writers cannot represent before any output
/// is produced.
fn validate_blocks(points: &[DVec3], cell_blocks: &[CellBlock]) -> Result<(), WriteError> {
    let vertex_count = points.len();

    for block in cell_blocks {
        if block.cell_type != TRIANGLE_CELL_TYPE {
            return Err(WriteError::UnsupportedCellType {
                name: block.cell_type.clone(),
            });
        }

        for cell in &block.cells {
            for &index in cell {
                if index as usize >= vertex_count {
                    return Err(WriteError::IndexOutOfRange {
                        index,
                        vertex_count,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Total number of cells across all blocks.
pub(crate) fn cell_count(cell_blocks: &[CellBlock]) -> usize {
    cell_blocks.iter().map(|block| block.cells.len()).sum()
}
