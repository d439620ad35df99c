//! Text serialization of the parameter summary and the warp mesh.
//!
//! Mesh layout: a format version line, a `width height` line, then one
//! `x y u v weight` line per vertex in row-major order.

use std::io::{self, Write};

use warpmesh_config::WarpParams;

use crate::format::General;
use crate::generator::WarpMesh;

/// First line of every mesh file.
pub const MESH_FORMAT_VERSION: u32 = 2;

/// Per-vertex weight written in the last column.
const VERTEX_WEIGHT: f64 = 1.0;

/// Write the human-readable parameter summary, followed by a blank line.
pub fn write_summary<W: Write>(out: &mut W, params: &WarpParams) -> io::Result<()> {
    writeln!(
        out,
        "Mesh square resolution: {} x {}",
        params.resolution.x, params.resolution.y
    )?;
    writeln!(out, "Target field of view: {}", General(params.output_fov))?;
    writeln!(
        out,
        "Equivalent field of view: {}",
        General(params.input_fov_degrees())
    )?;
    writeln!(out, "Shift ratio: {}", General(params.z_shift_ratio))?;
    writeln!(out, "Aspect ratio: {}", General(params.aspect))?;
    writeln!(out)
}

/// Write the mesh header and one line per vertex.
pub fn write_mesh<W: Write>(out: &mut W, mesh: &WarpMesh, aspect: f64) -> io::Result<()> {
    writeln!(out, "{MESH_FORMAT_VERSION}")?;
    writeln!(out, "{} {}", mesh.width(), mesh.height())?;

    for (position, uv) in mesh.rows(aspect) {
        writeln!(
            out,
            "{} {} {} {} {}",
            General(position.x),
            General(position.y),
            General(uv.x),
            General(uv.y),
            General(VERTEX_WEIGHT)
        )?;
    }
    Ok(())
}
