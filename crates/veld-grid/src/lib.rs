//! Sector lattice storage: the sliding D x D terrain window and its ring mapping.
#![forbid(unsafe_code)]

use veld_geom::Vec3;
use veld_noise::{NoiseField, NoiseParams};

/// One terrain sample on the lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    /// World x, generated height y, world z.
    pub position: Vec3,
    pub temperature: f32,
}

impl Sector {
    /// Half-extent of a sector's physical footprint. Cell spacing is
    /// conventionally `2.0 * SIZE`.
    pub const SIZE: f32 = 0.25;

    #[inline]
    pub const fn new(position: Vec3, temperature: f32) -> Self {
        Self {
            position,
            temperature,
        }
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            temperature: 75.0,
        }
    }
}

/// Single-cell movement along one lattice axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AxisStep {
    None,
    Pos,
    Neg,
}

impl AxisStep {
    /// Classifies a whole-cell delta by sign. Multi-cell deltas still map to
    /// one step; callers decide separately when a jump is too large to step.
    #[inline]
    pub fn from_delta(delta: i64) -> AxisStep {
        match delta {
            0 => AxisStep::None,
            d if d > 0 => AxisStep::Pos,
            _ => AxisStep::Neg,
        }
    }

    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            AxisStep::None => 0,
            AxisStep::Pos => 1,
            AxisStep::Neg => -1,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, AxisStep::None)
    }
}

/// Fixed `dim x dim` window of [`Sector`]s over the world lattice.
///
/// Storage is toroidal: logical `(row, col)` resolves through `row_head` /
/// `col_head` offsets, so sliding the window relabels the existing cells and
/// only the newly exposed edge needs fresh samples. No cell is ever copied
/// to a new slot.
///
/// Rows index world z, columns index world x. Logical `(r, c)` covers the
/// lattice point `(origin.0 + c, origin.1 + r)`.
#[derive(Clone, Debug)]
pub struct SectorGrid {
    dim: usize,
    spacing: f32,
    origin: (i64, i64),
    row_head: usize,
    col_head: usize,
    cells: Vec<Sector>,
}

impl SectorGrid {
    /// Builds a grid whose cells sit on their lattice points at height zero
    /// with default temperature. Callers sample real terrain afterwards.
    pub fn new(dim: usize, spacing: f32, origin: (i64, i64)) -> Self {
        assert!(dim >= 2, "grid dim must be at least 2, got {dim}");
        assert!(
            spacing > 0.0 && spacing.is_finite(),
            "cell spacing must be positive and finite, got {spacing}"
        );
        let mut grid = Self {
            dim,
            spacing,
            origin,
            row_head: 0,
            col_head: 0,
            cells: vec![Sector::default(); dim * dim],
        };
        for row in 0..dim {
            for col in 0..dim {
                let (x, z) = grid.world_pos(row, col);
                grid.cell_mut(row, col).position = Vec3::new(x, 0.0, z);
            }
        }
        grid
    }

    /// Grid centered on a camera lattice cell: origin = center - dim/2.
    pub fn centered(dim: usize, spacing: f32, center: (i64, i64)) -> Self {
        let half = (dim / 2) as i64;
        Self::new(dim, spacing, (center.0 - half, center.1 - half))
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Lattice coordinate (x, z) of a logical cell.
    #[inline]
    pub fn lattice_pos(&self, row: usize, col: usize) -> (i64, i64) {
        (self.origin.0 + col as i64, self.origin.1 + row as i64)
    }

    /// World-space (x, z) of a logical cell.
    #[inline]
    pub fn world_pos(&self, row: usize, col: usize) -> (f32, f32) {
        let (lx, lz) = self.lattice_pos(row, col);
        (lx as f32 * self.spacing, lz as f32 * self.spacing)
    }

    /// Physical slot of a logical cell under the ring offsets.
    #[inline]
    fn slot(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dim && col < self.dim);
        ((row + self.row_head) % self.dim) * self.dim + (col + self.col_head) % self.dim
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Sector {
        &self.cells[self.slot(row, col)]
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Sector {
        let i = self.slot(row, col);
        &mut self.cells[i]
    }

    #[inline]
    pub fn set_cell(&mut self, row: usize, col: usize, sector: Sector) {
        let i = self.slot(row, col);
        self.cells[i] = sector;
    }

    /// Raw physical storage, in slot order. Slot order is not logical order;
    /// this exists for change tracking and tests.
    #[inline]
    pub fn raw_cells(&self) -> &[Sector] {
        &self.cells
    }

    /// Snaps a world position to the nearest lattice cell (x, z).
    #[inline]
    pub fn snap_to_lattice(pos: Vec3, spacing: f32) -> (i64, i64) {
        (
            (pos.x / spacing).round() as i64,
            (pos.z / spacing).round() as i64,
        )
    }

    /// Slides the window one cell along x. Existing cells are relabeled via
    /// the ring offset; returns the logical column that now needs fresh
    /// samples, or `None` for `AxisStep::None`.
    pub fn slide_x(&mut self, step: AxisStep) -> Option<usize> {
        match step {
            AxisStep::None => None,
            AxisStep::Pos => {
                self.origin.0 += 1;
                self.col_head = (self.col_head + 1) % self.dim;
                Some(self.dim - 1)
            }
            AxisStep::Neg => {
                self.origin.0 -= 1;
                self.col_head = (self.col_head + self.dim - 1) % self.dim;
                Some(0)
            }
        }
    }

    /// Slides the window one cell along z. See [`SectorGrid::slide_x`].
    pub fn slide_z(&mut self, step: AxisStep) -> Option<usize> {
        match step {
            AxisStep::None => None,
            AxisStep::Pos => {
                self.origin.1 += 1;
                self.row_head = (self.row_head + 1) % self.dim;
                Some(self.dim - 1)
            }
            AxisStep::Neg => {
                self.origin.1 -= 1;
                self.row_head = (self.row_head + self.dim - 1) % self.dim;
                Some(0)
            }
        }
    }

    /// Moves the whole window so it is centered on `center`. Cell contents
    /// are left stale; callers resample everything afterwards.
    pub fn recenter(&mut self, center: (i64, i64)) {
        let half = (self.dim / 2) as i64;
        self.origin = (center.0 - half, center.1 - half);
    }
}

/// Samples one sector at a logical cell's lattice position.
#[inline]
pub fn sample_cell(
    grid: &SectorGrid,
    field: &NoiseField,
    params: &NoiseParams,
    row: usize,
    col: usize,
) -> Sector {
    let (x, z) = grid.world_pos(row, col);
    let (height, temperature) = field.sample(params, x, z);
    Sector::new(Vec3::new(x, height, z), temperature)
}

/// Fresh samples for every cell of one logical row, in column order.
/// Pure read of the grid's geometry; safe to run while another task samples
/// a column of the same grid.
pub fn sample_row(
    grid: &SectorGrid,
    field: &NoiseField,
    params: &NoiseParams,
    row: usize,
) -> Vec<Sector> {
    (0..grid.dim())
        .map(|col| sample_cell(grid, field, params, row, col))
        .collect()
}

/// Fresh samples for every cell of one logical column, in row order.
pub fn sample_col(
    grid: &SectorGrid,
    field: &NoiseField,
    params: &NoiseParams,
    col: usize,
) -> Vec<Sector> {
    (0..grid.dim())
        .map(|row| sample_cell(grid, field, params, row, col))
        .collect()
}

/// Writes a sampled row back into the grid.
pub fn apply_row(grid: &mut SectorGrid, row: usize, cells: &[Sector]) {
    debug_assert_eq!(cells.len(), grid.dim());
    for (col, sector) in cells.iter().enumerate() {
        grid.set_cell(row, col, *sector);
    }
}

/// Writes a sampled column back into the grid.
pub fn apply_col(grid: &mut SectorGrid, col: usize, cells: &[Sector]) {
    debug_assert_eq!(cells.len(), grid.dim());
    for (row, sector) in cells.iter().enumerate() {
        grid.set_cell(row, col, *sector);
    }
}

/// Resamples every cell in place. The grid's origin is unchanged.
pub fn populate_grid(grid: &mut SectorGrid, field: &NoiseField, params: &NoiseParams) {
    for row in 0..grid.dim() {
        for col in 0..grid.dim() {
            let sector = sample_cell(grid, field, params, row, col);
            grid.set_cell(row, col, sector);
        }
    }
}
