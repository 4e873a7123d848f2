use veld_geom::Vec3;

/// Indexed terrain mesh storage: parallel per-vertex arrays plus a triangle
/// index list. Reused across frames via [`TerrainBuffers::clear_keep_capacity`].
#[derive(Default, Clone)]
pub struct TerrainBuffers {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub temp: Vec<f32>,
    pub height: Vec<f32>,
    pub idx: Vec<u32>,
}

impl TerrainBuffers {
    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.temp.clear();
        self.height.clear();
        self.idx.clear();
    }

    /// Pre-reserve for a full `dim x dim` welded grid.
    #[inline]
    pub fn reserve_grid(&mut self, dim: usize) {
        let verts = dim * dim;
        let quads = (dim - 1) * (dim - 1);
        self.pos.reserve(verts * 3);
        self.norm.reserve(verts * 3);
        self.uv.reserve(verts * 2);
        self.temp.reserve(verts);
        self.height.reserve(verts);
        self.idx.reserve(quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub(crate) fn position(&self, i: u32) -> Vec3 {
        let at = i as usize * 3;
        Vec3::new(self.pos[at], self.pos[at + 1], self.pos[at + 2])
    }

    #[inline]
    pub(crate) fn accumulate_normal(&mut self, i: u32, n: Vec3) {
        let at = i as usize * 3;
        self.norm[at] += n.x;
        self.norm[at + 1] += n.y;
        self.norm[at + 2] += n.z;
    }
}

/// Flat water-plane mesh storage. No normals; the plane faces up.
#[derive(Default, Clone)]
pub struct WaterBuffers {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl WaterBuffers {
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.idx.clear();
    }

    #[inline]
    pub fn reserve_grid(&mut self, dim: usize) {
        let verts = dim * dim;
        let quads = (dim - 1) * (dim - 1);
        self.pos.reserve(verts * 3);
        self.uv.reserve(verts * 2);
        self.idx.reserve(quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }
}
