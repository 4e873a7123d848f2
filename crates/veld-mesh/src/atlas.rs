use veld_geom::Vec2;

// Terrain texture atlas window. Adjacent cells alternate between the two
// stops by lattice parity, so neighboring quads mirror-tile the atlas cell
// and stay stable while the window slides.
const TERRAIN_U: [f32; 2] = [0.0, 0.24];
const TERRAIN_V: [f32; 2] = [0.0, 0.50];

// Water tiles the full texture.
const WATER_U: [f32; 2] = [0.0, 1.0];
const WATER_V: [f32; 2] = [0.0, 1.0];

pub(crate) fn terrain_uv(lx: i64, lz: i64) -> Vec2 {
    Vec2::new(TERRAIN_U[(lx & 1) as usize], TERRAIN_V[(lz & 1) as usize])
}

pub(crate) fn water_uv(lx: i64, lz: i64) -> Vec2 {
    Vec2::new(WATER_U[(lx & 1) as usize], WATER_V[(lz & 1) as usize])
}
