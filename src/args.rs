use std::path::PathBuf;

use clap::Parser;

/// Headless harness: walks a camera across the procedural terrain window and
/// reports update/mesh timings.
#[derive(Parser, Debug)]
#[command(name = "veld")]
#[command(about = "Walk a camera across a sliding procedural terrain window")]
pub struct Args {
    /// Run config TOML; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Cells per window side.
    #[arg(long)]
    pub dim: Option<usize>,

    /// World-space distance between adjacent cells.
    #[arg(long)]
    pub spacing: Option<f32>,

    /// Camera steps to walk.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Water plane height.
    #[arg(long)]
    pub sea_level: Option<f32>,

    /// Watch the config file and hot-reload noise parameters.
    #[arg(long)]
    pub watch: bool,

    /// Write the final terrain and water meshes to this Wavefront OBJ path.
    #[arg(long)]
    pub export_obj: Option<PathBuf>,

    /// Background regen workers; 0 refreshes synchronously.
    #[arg(long)]
    pub threads: Option<usize>,
}
