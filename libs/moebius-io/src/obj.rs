//! # OBJ Writing
//!
//! ASCII Wavefront OBJ output. Vertex indices in OBJ are 1-based.

use crate::error::WriteError;
use crate::CellBlock;
use glam::DVec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves points and triangle cells to an OBJ file.
///
/// The object name is taken from the file stem.
pub fn write_obj<P: AsRef<Path>>(
    path: P,
    points: &[DVec3],
    cell_blocks: &[CellBlock],
) -> Result<(), WriteError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("mesh");

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# generated by moebius-io")?;
    writeln!(writer, "o {name}")?;

    for p in points {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for block in cell_blocks {
        for tri in &block.cells {
            writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
        }
    }

    writer.flush()?;
    Ok(())
}
