use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use veld_mesh::{TerrainBuffers, WaterBuffers};

/// Writes terrain and water as two objects in a single Wavefront OBJ file.
/// Terrain faces are v/vt/vn; water has no normals so its faces are v/vt.
/// OBJ indices are 1-based, and the water block continues the terrain
/// counters.
pub fn write_obj<W: Write>(
    w: &mut W,
    terrain: &TerrainBuffers,
    water: &WaterBuffers,
) -> io::Result<()> {
    writeln!(w, "o terrain")?;
    for p in terrain.pos.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in terrain.uv.chunks_exact(2) {
        writeln!(w, "vt {} {}", uv[0], uv[1])?;
    }
    for n in terrain.norm.chunks_exact(3) {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for tri in terrain.idx.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    let base = terrain.vertex_count() as u32;
    writeln!(w, "o water")?;
    for p in water.pos.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in water.uv.chunks_exact(2) {
        writeln!(w, "vt {} {}", uv[0], uv[1])?;
    }
    for tri in water.idx.chunks_exact(3) {
        let (a, b, c) = (
            base + tri[0] + 1,
            base + tri[1] + 1,
            base + tri[2] + 1,
        );
        writeln!(w, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }
    Ok(())
}

pub fn export_obj(
    path: &Path,
    terrain: &TerrainBuffers,
    water: &WaterBuffers,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_obj(&mut w, terrain, water)?;
    w.flush()
}
