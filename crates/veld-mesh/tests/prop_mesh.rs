use proptest::prelude::*;
use veld_grid::{SectorGrid, populate_grid};
use veld_mesh::{build_terrain, build_water};
use veld_noise::{NoiseField, NoiseParams};

proptest! {
    // Weld invariants hold for any seed and window placement: one vertex per
    // cell, two triangles per quad, every index in range.
    #[test]
    fn weld_and_index_invariants(
        seed in any::<i32>(),
        dim in 2usize..12,
        ox in -1000i64..1000,
        oz in -1000i64..1000,
    ) {
        let params = NoiseParams::default();
        let field = NoiseField::new(seed);
        let mut grid = SectorGrid::new(dim, 0.5, (ox, oz));
        populate_grid(&mut grid, &field, &params);

        let mesh = build_terrain(&grid);
        prop_assert_eq!(mesh.vertex_count(), dim * dim);
        prop_assert_eq!(mesh.idx.len(), 6 * (dim - 1) * (dim - 1));
        prop_assert_eq!(mesh.idx.len() % 3, 0);
        let count = mesh.vertex_count() as u32;
        for &i in &mesh.idx {
            prop_assert!(i < count);
        }
    }

    // After the normalize pass every emitted normal is unit length, except a
    // fully cancelled sum, which stays the zero vector.
    #[test]
    fn normals_unit_or_zero(
        seed in any::<i32>(),
        dim in 2usize..10,
    ) {
        let params = NoiseParams::default();
        let field = NoiseField::new(seed);
        let mut grid = SectorGrid::centered(dim, 0.5, (0, 0));
        populate_grid(&mut grid, &field, &params);

        let mesh = build_terrain(&grid);
        for n in mesh.norm.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            prop_assert!((len - 1.0).abs() <= 1e-4 || len == 0.0, "len {}", len);
        }
    }

    // Water height is bit-exact at sea level for every vertex.
    #[test]
    fn water_height_exact(
        seed in any::<i32>(),
        dim in 2usize..10,
        sea_level in -10.0f32..10.0,
    ) {
        let params = NoiseParams::default();
        let field = NoiseField::new(seed);
        let mut grid = SectorGrid::centered(dim, 0.5, (0, 0));
        populate_grid(&mut grid, &field, &params);

        let water = build_water(&grid, sea_level);
        prop_assert_eq!(water.vertex_count(), dim * dim);
        for v in 0..water.vertex_count() {
            prop_assert_eq!(water.pos[v * 3 + 1], sea_level);
        }
    }
}
