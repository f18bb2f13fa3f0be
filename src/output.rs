use std::io::{self, Write};

use voxquad_quad::{ShadingMode, Vertex};

use crate::cli::Format;

pub fn write_vertices<W: Write>(
    out: &mut W,
    vertices: &[Vertex],
    shading: ShadingMode,
    format: Format,
) -> io::Result<()> {
    if format == Format::Csv {
        writeln!(out, "x,y,z,u,v,texture,direction,ao,light")?;
    }
    for v in vertices {
        let [x, y, z] = v.position.to_array();
        let [u, w] = v.tex_coordinates.to_array();
        let light = shading.light_factor(v);
        match format {
            Format::Text => writeln!(
                out,
                "pos=({x}, {y}, {z}) uv=({u}, {w}) tex={} dir={} ao={} light={light:.2}",
                v.texture_index, v.direction, v.ao
            )?,
            Format::Csv => writeln!(
                out,
                "{x},{y},{z},{u},{w},{},{},{},{light:.4}",
                v.texture_index, v.direction, v.ao
            )?,
        }
    }
    Ok(())
}
