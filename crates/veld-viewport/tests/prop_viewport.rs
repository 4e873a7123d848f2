use proptest::prelude::*;
use veld_geom::Vec3;
use veld_viewport::{UpdateResult, Viewport};

const SPACING: f32 = 0.5;
const DIM: usize = 5;

fn camera_at(cell: (i64, i64)) -> Vec3 {
    Vec3::new(cell.0 as f32 * SPACING, 0.0, cell.1 as f32 * SPACING)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Edge repair must be path-independent: any chain of one-cell moves ends
    // with the same cells a fresh build at the final center would hold.
    #[test]
    fn one_cell_walk_matches_fresh_viewport(
        seed in -10_000i32..10_000,
        steps in proptest::collection::vec((-1i64..=1, -1i64..=1), 1..24),
    ) {
        let mut vp = Viewport::new(Vec3::ZERO, DIM, SPACING, seed);
        let mut cell = (0i64, 0i64);
        for (dx, dz) in steps {
            cell = (cell.0 + dx, cell.1 + dz);
            let result = vp.update(camera_at(cell));
            if dx == 0 && dz == 0 {
                prop_assert_eq!(result, UpdateResult::Idle);
            } else {
                prop_assert!(
                    matches!(result, UpdateResult::Shifted { .. }),
                    "expected UpdateResult::Shifted"
                );
            }
        }
        let fresh = Viewport::new(camera_at(cell), DIM, SPACING, seed);
        prop_assert_eq!(vp.grid().origin(), fresh.grid().origin());
        for row in 0..DIM {
            for col in 0..DIM {
                let a = vp.cell(row, col);
                let b = fresh.cell(row, col);
                prop_assert_eq!(a.position, b.position);
                prop_assert_eq!(a.temperature, b.temperature);
            }
        }
    }

    #[test]
    fn mixed_hops_keep_window_centered(
        seed in -10_000i32..10_000,
        hops in proptest::collection::vec((-8i64..=8, -8i64..=8), 1..10),
    ) {
        let mut vp = Viewport::new(Vec3::ZERO, DIM, SPACING, seed);
        let mut cell = (0i64, 0i64);
        for (dx, dz) in hops {
            cell = (cell.0 + dx, cell.1 + dz);
            vp.update(camera_at(cell));
            prop_assert_eq!(vp.center(), cell);
            let half = (DIM / 2) as i64;
            prop_assert_eq!(vp.grid().origin(), (cell.0 - half, cell.1 - half));
        }
        let fresh = Viewport::new(camera_at(cell), DIM, SPACING, seed);
        for row in 0..DIM {
            for col in 0..DIM {
                let a = vp.cell(row, col);
                let b = fresh.cell(row, col);
                prop_assert_eq!(a.position, b.position);
                prop_assert_eq!(a.temperature, b.temperature);
            }
        }
    }

    // Ring relabeling must never detach a cell from its lattice site.
    #[test]
    fn cells_always_sit_on_their_lattice_site(
        seed in -10_000i32..10_000,
        hops in proptest::collection::vec((-4i64..=4, -4i64..=4), 1..10),
    ) {
        let mut vp = Viewport::new(Vec3::ZERO, DIM, SPACING, seed);
        let mut cell = (0i64, 0i64);
        for (dx, dz) in hops {
            cell = (cell.0 + dx, cell.1 + dz);
            vp.update(camera_at(cell));
            let grid = vp.grid();
            for row in 0..DIM {
                for col in 0..DIM {
                    let (wx, wz) = grid.world_pos(row, col);
                    let sector = grid.cell(row, col);
                    prop_assert_eq!(sector.position.x, wx);
                    prop_assert_eq!(sector.position.z, wz);
                }
            }
        }
    }
}
