mod args;
mod obj;
mod runcfg;
mod watch;

use std::time::Instant;

use clap::Parser;
use veld_geom::Vec3;
use veld_mesh::{TerrainBuffers, WaterBuffers};
use veld_noise::NoiseParams;
use veld_runtime::{RegenJob, Runtime};
use veld_viewport::{UpdateResult, Viewport};

use crate::args::Args;
use crate::runcfg::RunConfig;

/// Square-spiral cell after `step` single-cell moves. Exercises both axes
/// and both signs without ever jumping more than one cell.
fn spiral_cell(step: u64) -> (i64, i64) {
    let dirs = [(1i64, 0i64), (0, -1), (-1, 0), (0, 1)];
    let mut pos = (0i64, 0i64);
    let mut dir = 0usize;
    let mut run = 1u64;
    let mut done = 0u64;
    while done < step {
        let take = run.min(step - done);
        pos.0 += dirs[dir].0 * take as i64;
        pos.1 += dirs[dir].1 * take as i64;
        done += take;
        if take < run {
            break;
        }
        dir = (dir + 1) % 4;
        if dir % 2 == 0 {
            run += 1;
        }
    }
    pos
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => match runcfg::load_run_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("failed to load run config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(v) = args.seed {
        cfg.seed = v;
    }
    if let Some(v) = args.dim {
        cfg.dim = v;
    }
    if let Some(v) = args.spacing {
        cfg.spacing = v;
    }
    if let Some(v) = args.steps {
        cfg.steps = v;
    }
    if let Some(v) = args.sea_level {
        cfg.sea_level = v;
    }

    log::info!(
        "window {}x{} spacing {} seed {} steps {} sea level {}",
        cfg.dim,
        cfg.dim,
        cfg.spacing,
        cfg.seed,
        cfg.steps,
        cfg.sea_level
    );

    let params = NoiseParams::from_config(&cfg.noise);
    let mut viewport = Viewport::with_params(Vec3::ZERO, cfg.dim, cfg.spacing, cfg.seed, params);

    let runtime = match args.threads {
        Some(n) if n > 0 => Some(Runtime::new(n)),
        _ => None,
    };
    let mut params_rev: u64 = 1;
    let mut next_job_id: u64 = 0;
    let mut regen_inflight = false;

    let watch_rx = match (&args.config, args.watch) {
        (Some(path), true) => Some(watch::spawn_config_watcher(path.clone())),
        (None, true) => {
            log::warn!("--watch needs --config; ignoring");
            None
        }
        _ => None,
    };

    let mut terrain = TerrainBuffers::default();
    let mut water = WaterBuffers::default();
    let mut idle = 0u64;
    let mut shifted = 0u64;
    let mut recentered = 0u64;
    let mut update_us: u128 = 0;
    let mut mesh_us: u128 = 0;

    for step in 0..cfg.steps {
        let cell = spiral_cell(step);
        let cam = Vec3::new(
            cell.0 as f32 * cfg.spacing,
            0.0,
            cell.1 as f32 * cfg.spacing,
        );

        let t0 = Instant::now();
        let result = viewport.update(cam);
        update_us += t0.elapsed().as_micros();
        match result {
            UpdateResult::Idle => idle += 1,
            UpdateResult::Shifted { .. } => shifted += 1,
            UpdateResult::Recentered => recentered += 1,
        }

        if let (Some(rx), Some(path)) = (&watch_rx, &args.config) {
            if let Some(new_params) = watch::process_noise_file_events(rx, path) {
                params_rev += 1;
                viewport.set_params(new_params);
            }
        }

        if let Some(rt) = &runtime {
            for out in rt.drain_results() {
                regen_inflight = false;
                if out.rev != params_rev {
                    // Parameters changed again while this rebuild ran; the
                    // window is still dirty and resubmits with the newer rev.
                    continue;
                }
                log::info!(
                    target: "perf",
                    "regen rev {} job {} built in {} ms",
                    out.rev,
                    out.job_id,
                    out.t_gen_ms
                );
                viewport.install_grid(out.grid);
            }
        }

        if viewport.is_dirty() {
            match &runtime {
                Some(rt) if !regen_inflight => {
                    next_job_id += 1;
                    rt.submit_regen(RegenJob {
                        center: viewport.center(),
                        dim: cfg.dim,
                        spacing: cfg.spacing,
                        seed: cfg.seed,
                        params: viewport.params().clone(),
                        rev: params_rev,
                        job_id: next_job_id,
                    });
                    regen_inflight = true;
                }
                Some(_) => {}
                None => viewport.refresh(),
            }
        }

        let t1 = Instant::now();
        viewport.draw_into(&mut terrain);
        viewport.draw_water_into(cfg.sea_level, &mut water);
        mesh_us += t1.elapsed().as_micros();

        log::debug!(
            target: "perf",
            "step {step} cell ({}, {}) {:?} verts {} idx {}",
            cell.0,
            cell.1,
            result,
            terrain.vertex_count(),
            terrain.idx.len()
        );
    }

    log::info!(
        target: "perf",
        "steps {}: idle {} shifted {} recentered {}; update {} ms mesh {} ms",
        cfg.steps,
        idle,
        shifted,
        recentered,
        update_us / 1000,
        mesh_us / 1000
    );

    if let Some(path) = &args.export_obj {
        viewport.draw_into(&mut terrain);
        viewport.draw_water_into(cfg.sea_level, &mut water);
        match obj::export_obj(path, &terrain, &water) {
            Ok(()) => log::info!(
                "wrote {} terrain verts and {} water verts to {}",
                terrain.vertex_count(),
                water.vertex_count(),
                path.display()
            ),
            Err(e) => {
                log::error!("obj export failed ({}): {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
}
