//! Camera-tracking terrain window: owns a `SectorGrid` plus the noise stack,
//! repairs the grid edge-by-edge as the camera moves, and emits meshes.
#![forbid(unsafe_code)]

use veld_geom::Vec3;
use veld_grid::{
    AxisStep, Sector, SectorGrid, apply_col, apply_row, populate_grid, sample_col, sample_row,
};
use veld_mesh::{
    TerrainBuffers, WaterBuffers, build_terrain, build_terrain_into, build_water, build_water_into,
};
use veld_noise::{HeightOctave, NoiseField, NoiseParams};

/// What a call to [`Viewport::update`] did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// Camera stayed in its cell; nothing was resampled.
    Idle,
    /// Camera crossed into an adjacent cell; only the entering edge rows
    /// and/or columns were resampled.
    Shifted { x: AxisStep, z: AxisStep },
    /// Camera jumped more than one cell on some axis; the window snapped to
    /// the new center and resampled in full.
    Recentered,
}

/// A square window of terrain that follows the camera across an unbounded
/// lattice.
///
/// The window keeps itself centered on the camera's lattice cell. One-cell
/// crossings are repaired by resampling only the entering edge; larger jumps
/// fall back to a full rebuild around the new center. Sampling is pure, so a
/// viewport at a given center always holds the same cells no matter the path
/// the camera took to get there.
pub struct Viewport {
    grid: SectorGrid,
    field: NoiseField,
    params: NoiseParams,
    center: (i64, i64),
    dirty: bool,
}

impl Viewport {
    /// Builds a fully populated window of `dim` x `dim` cells centered on the
    /// camera, with default noise parameters.
    pub fn new(camera_pos: Vec3, dim: usize, spacing: f32, seed: i32) -> Self {
        Self::with_params(camera_pos, dim, spacing, seed, NoiseParams::default())
    }

    /// Like [`Viewport::new`] but with explicit noise parameters.
    pub fn with_params(
        camera_pos: Vec3,
        dim: usize,
        spacing: f32,
        seed: i32,
        params: NoiseParams,
    ) -> Self {
        let center = SectorGrid::snap_to_lattice(camera_pos, spacing);
        let mut grid = SectorGrid::centered(dim, spacing, center);
        let field = NoiseField::new(seed);
        populate_grid(&mut grid, &field, &params);
        Self {
            grid,
            field,
            params,
            center,
            dirty: false,
        }
    }

    /// Tracks the camera. Slides and repairs the grid when the camera crossed
    /// a cell boundary since the last call; does nothing otherwise.
    pub fn update(&mut self, camera_pos: Vec3) -> UpdateResult {
        let snapped = SectorGrid::snap_to_lattice(camera_pos, self.grid.spacing());
        let dx = snapped.0 - self.center.0;
        let dz = snapped.1 - self.center.1;
        if dx == 0 && dz == 0 {
            return UpdateResult::Idle;
        }
        self.center = snapped;
        if dx.abs() > 1 || dz.abs() > 1 {
            // Edge repair can't catch up across a multi-cell jump; rebuild
            // the whole window around the new center.
            log::debug!(
                target: "viewport",
                "recenter to ({}, {}) after jump of ({}, {}) cells",
                snapped.0,
                snapped.1,
                dx,
                dz
            );
            self.grid.recenter(snapped);
            populate_grid(&mut self.grid, &self.field, &self.params);
            return UpdateResult::Recentered;
        }
        let step_x = AxisStep::from_delta(dx);
        let step_z = AxisStep::from_delta(dz);
        // Slide both axes before sampling so the exposed edges are sampled at
        // the window's final origin.
        let exposed_row = self.grid.slide_z(step_z);
        let exposed_col = self.grid.slide_x(step_x);
        let (row_cells, col_cells) = match (exposed_row, exposed_col) {
            (Some(row), Some(col)) => {
                let (r, c) = rayon::join(
                    || sample_row(&self.grid, &self.field, &self.params, row),
                    || sample_col(&self.grid, &self.field, &self.params, col),
                );
                (Some(r), Some(c))
            }
            (Some(row), None) => (
                Some(sample_row(&self.grid, &self.field, &self.params, row)),
                None,
            ),
            (None, Some(col)) => (
                None,
                Some(sample_col(&self.grid, &self.field, &self.params, col)),
            ),
            (None, None) => (None, None),
        };
        // Row first, column second: on a diagonal step the shared corner gets
        // written twice with the same value, and the column pass lands last.
        if let (Some(row), Some(cells)) = (exposed_row, &row_cells) {
            apply_row(&mut self.grid, row, cells);
        }
        if let (Some(col), Some(cells)) = (exposed_col, &col_cells) {
            apply_col(&mut self.grid, col, cells);
        }
        UpdateResult::Shifted {
            x: step_x,
            z: step_z,
        }
    }

    /// Resamples every cell with the current parameters and clears the dirty
    /// flag. Call after parameter edits, not per frame.
    pub fn refresh(&mut self) {
        populate_grid(&mut self.grid, &self.field, &self.params);
        self.dirty = false;
    }

    /// Replaces the grid with one built elsewhere (for example on a
    /// background regeneration pool) and re-derives the window center from
    /// it. Clears the dirty flag: callers must only install grids built from
    /// the viewport's current parameters.
    ///
    /// # Panics
    /// Panics if the incoming grid's dimension or spacing differ from this
    /// viewport's.
    pub fn install_grid(&mut self, grid: SectorGrid) {
        assert_eq!(
            grid.dim(),
            self.grid.dim(),
            "installed grid dimension {} does not match viewport dimension {}",
            grid.dim(),
            self.grid.dim()
        );
        assert_eq!(
            grid.spacing(),
            self.grid.spacing(),
            "installed grid spacing {} does not match viewport spacing {}",
            grid.spacing(),
            self.grid.spacing()
        );
        let half = (grid.dim() / 2) as i64;
        let origin = grid.origin();
        self.center = (origin.0 + half, origin.1 + half);
        self.grid = grid;
        self.dirty = false;
    }

    /// Builds a fresh welded terrain mesh for the current window.
    pub fn draw(&self) -> TerrainBuffers {
        build_terrain(&self.grid)
    }

    /// Rebuilds the terrain mesh into caller-owned buffers, reusing their
    /// capacity.
    pub fn draw_into(&self, out: &mut TerrainBuffers) {
        build_terrain_into(&self.grid, out);
    }

    /// Builds a fresh flat water mesh at `sea_level` covering the window.
    pub fn draw_water(&self, sea_level: f32) -> WaterBuffers {
        build_water(&self.grid, sea_level)
    }

    /// Rebuilds the water mesh into caller-owned buffers.
    pub fn draw_water_into(&self, sea_level: f32, out: &mut WaterBuffers) {
        build_water_into(&self.grid, sea_level, out);
    }

    pub fn set_height_octave1(&mut self, octave: HeightOctave) {
        self.params.height_octave1 = octave;
        self.dirty = true;
    }

    pub fn set_height_octave2(&mut self, octave: HeightOctave) {
        self.params.height_octave2 = octave;
        self.dirty = true;
    }

    pub fn set_height_octave3(&mut self, octave: HeightOctave) {
        self.params.height_octave3 = octave;
        self.dirty = true;
    }

    pub fn set_height_power(&mut self, power: f32) {
        self.params.height_power = power;
        self.dirty = true;
    }

    pub fn set_seabed_octave(&mut self, octave: HeightOctave) {
        self.params.seabed_octave = octave;
        self.dirty = true;
    }

    pub fn set_height_multiplier(&mut self, multiplier: f32) {
        self.params.height_multiplier = multiplier;
        self.dirty = true;
    }

    /// Swaps the whole parameter set at once (config reload path).
    pub fn set_params(&mut self, params: NoiseParams) {
        self.params = params;
        self.dirty = true;
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// True when parameters changed since the last [`Viewport::refresh`];
    /// meshes drawn while dirty still reflect the old parameters.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn grid(&self) -> &SectorGrid {
        &self.grid
    }

    /// Lattice cell the window is currently centered on.
    pub fn center(&self) -> (i64, i64) {
        self.center
    }

    /// Cell at logical `(row, col)` of the window.
    pub fn cell(&self, row: usize, col: usize) -> &Sector {
        self.grid.cell(row, col)
    }
}
