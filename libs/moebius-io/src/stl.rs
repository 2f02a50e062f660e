//! # STL Writing
//!
//! Binary and ASCII STL output. STL stores loose facets rather than an
//! indexed mesh, so each triangle carries its own three vertex positions
//! plus a facet normal computed from them.

use crate::error::WriteError;
use crate::{cell_count, CellBlock};
use glam::DVec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves points and triangle cells to a binary STL file.
pub fn write_stl_binary<P: AsRef<Path>>(
    path: P,
    points: &[DVec3],
    cell_blocks: &[CellBlock],
) -> Result<(), WriteError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // 80-byte header, zero padded
    let mut header = [0u8; 80];
    let tag = b"Binary STL generated by moebius-io";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    // Triangle count (4 bytes, little-endian)
    let count = cell_count(cell_blocks) as u32;
    writer.write_all(&count.to_le_bytes())?;

    // Each facet is 50 bytes: normal, three vertices, attribute count
    for block in cell_blocks {
        for tri in &block.cells {
            let v0 = points[tri[0] as usize];
            let v1 = points[tri[1] as usize];
            let v2 = points[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

            write_vector(&mut writer, normal)?;
            write_vector(&mut writer, v0)?;
            write_vector(&mut writer, v1)?;
            write_vector(&mut writer, v2)?;
            writer.write_all(&[0u8, 0u8])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes a vector as three little-endian f32 values.
fn write_vector<W: Write>(writer: &mut W, v: DVec3) -> Result<(), WriteError> {
    writer.write_all(&(v.x as f32).to_le_bytes())?;
    writer.write_all(&(v.y as f32).to_le_bytes())?;
    writer.write_all(&(v.z as f32).to_le_bytes())?;
    Ok(())
}

/// Saves points and triangle cells to an ASCII STL file.
pub fn write_stl_ascii<P: AsRef<Path>>(
    path: P,
    points: &[DVec3],
    cell_blocks: &[CellBlock],
) -> Result<(), WriteError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "solid mesh")?;

    for block in cell_blocks {
        for tri in &block.cells {
            let v0 = points[tri[0] as usize];
            let v1 = points[tri[1] as usize];
            let v2 = points[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

            writeln!(
                writer,
                "  facet normal {} {} {}",
                normal.x, normal.y, normal.z
            )?;
            writeln!(writer, "    outer loop")?;
            writeln!(writer, "      vertex {} {} {}", v0.x, v0.y, v0.z)?;
            writeln!(writer, "      vertex {} {} {}", v1.x, v1.y, v1.z)?;
            writeln!(writer, "      vertex {} {} {}", v2.x, v2.y, v2.z)?;
            writeln!(writer, "    endloop")?;
            writeln!(writer, "  endfacet")?;
        }
    }

    writeln!(writer, "endsolid mesh")?;
    writer.flush()?;
    Ok(())
}
