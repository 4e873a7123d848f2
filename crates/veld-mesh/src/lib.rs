//! CPU mesh assembly: welds the sector grid into indexed terrain and water
//! meshes with smooth per-vertex normals.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use veld_geom::Vec3;
use veld_grid::SectorGrid;

mod atlas;
mod buffers;

pub use buffers::{TerrainBuffers, WaterBuffers};

use atlas::{terrain_uv, water_uv};

/// Builds the welded terrain mesh for the grid's current state into `out`,
/// reusing its storage.
///
/// Every grid cell becomes exactly one vertex; the `(dim-1) x (dim-1)` quads
/// share corners through an index map keyed by flattened logical position.
/// Face normals accumulate per vertex and a final pass normalizes the sums.
/// A sum that cancels to exactly zero is left as the zero vector rather than
/// divided into NaN.
pub fn build_terrain_into(grid: &SectorGrid, out: &mut TerrainBuffers) {
    let dim = grid.dim();
    out.clear_keep_capacity();
    out.reserve_grid(dim);

    let mut index_map: HashMap<usize, u32> = HashMap::with_capacity(dim * dim);
    for row in 0..dim - 1 {
        for col in 0..dim - 1 {
            let tl = terrain_vertex(grid, out, &mut index_map, row, col);
            let tr = terrain_vertex(grid, out, &mut index_map, row, col + 1);
            let bl = terrain_vertex(grid, out, &mut index_map, row + 1, col);
            let br = terrain_vertex(grid, out, &mut index_map, row + 1, col + 1);
            // Fixed diagonal split, counter-clockwise seen from above.
            emit_triangle(out, tl, bl, tr);
            emit_triangle(out, br, tr, bl);
        }
    }

    for n in out.norm.chunks_exact_mut(3) {
        let v = Vec3::new(n[0], n[1], n[2]).normalized();
        n[0] = v.x;
        n[1] = v.y;
        n[2] = v.z;
    }
}

/// One-shot variant of [`build_terrain_into`].
pub fn build_terrain(grid: &SectorGrid) -> TerrainBuffers {
    let mut out = TerrainBuffers::default();
    build_terrain_into(grid, &mut out);
    out
}

/// Builds the flat water plane over the grid's footprint into `out`. Every
/// vertex sits at exactly `sea_level`; the index map is independent of the
/// terrain mesh's.
pub fn build_water_into(grid: &SectorGrid, sea_level: f32, out: &mut WaterBuffers) {
    let dim = grid.dim();
    out.clear_keep_capacity();
    out.reserve_grid(dim);

    let mut index_map: HashMap<usize, u32> = HashMap::with_capacity(dim * dim);
    for row in 0..dim - 1 {
        for col in 0..dim - 1 {
            let tl = water_vertex(grid, sea_level, out, &mut index_map, row, col);
            let tr = water_vertex(grid, sea_level, out, &mut index_map, row, col + 1);
            let bl = water_vertex(grid, sea_level, out, &mut index_map, row + 1, col);
            let br = water_vertex(grid, sea_level, out, &mut index_map, row + 1, col + 1);
            out.idx.extend_from_slice(&[tl, bl, tr, br, tr, bl]);
        }
    }
}

/// One-shot variant of [`build_water_into`].
pub fn build_water(grid: &SectorGrid, sea_level: f32) -> WaterBuffers {
    let mut out = WaterBuffers::default();
    build_water_into(grid, sea_level, &mut out);
    out
}

fn terrain_vertex(
    grid: &SectorGrid,
    out: &mut TerrainBuffers,
    index_map: &mut HashMap<usize, u32>,
    row: usize,
    col: usize,
) -> u32 {
    let key = row * grid.dim() + col;
    if let Some(&i) = index_map.get(&key) {
        return i;
    }
    let sector = grid.cell(row, col);
    let (lx, lz) = grid.lattice_pos(row, col);
    let i = out.vertex_count() as u32;
    out.pos.extend_from_slice(&[
        sector.position.x,
        sector.position.y,
        sector.position.z,
    ]);
    out.norm.extend_from_slice(&[0.0, 0.0, 0.0]);
    let uv = terrain_uv(lx, lz);
    out.uv.extend_from_slice(&[uv.x, uv.y]);
    out.temp.push(sector.temperature);
    out.height.push(sector.position.y);
    index_map.insert(key, i);
    i
}

fn water_vertex(
    grid: &SectorGrid,
    sea_level: f32,
    out: &mut WaterBuffers,
    index_map: &mut HashMap<usize, u32>,
    row: usize,
    col: usize,
) -> u32 {
    let key = row * grid.dim() + col;
    if let Some(&i) = index_map.get(&key) {
        return i;
    }
    let (x, z) = grid.world_pos(row, col);
    let (lx, lz) = grid.lattice_pos(row, col);
    let i = out.vertex_count() as u32;
    out.pos.extend_from_slice(&[x, sea_level, z]);
    let uv = water_uv(lx, lz);
    out.uv.extend_from_slice(&[uv.x, uv.y]);
    index_map.insert(key, i);
    i
}

// Unit face normal accumulated into each corner; the unweighted average of
// adjacent faces falls out of the final normalize pass.
fn emit_triangle(out: &mut TerrainBuffers, a: u32, b: u32, c: u32) {
    let pa = out.position(a);
    let pb = out.position(b);
    let pc = out.position(c);
    let n = (pb - pa).cross(pc - pa).normalized();
    out.accumulate_normal(a, n);
    out.accumulate_normal(b, n);
    out.accumulate_normal(c, n);
    out.idx.extend_from_slice(&[a, b, c]);
}
