use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use veld_grid::Sector;
use veld_noise::NoiseConfig;

/// Launch settings for the harness. Noise fields live at the top level of
/// the same TOML file so the hot-reload path can re-read them with the
/// noise crate's own loader.
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_dim")]
    pub dim: usize,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default = "default_sea_level")]
    pub sea_level: f32,
    #[serde(flatten)]
    pub noise: NoiseConfig,
}

fn default_seed() -> i32 {
    1337
}
fn default_dim() -> usize {
    192
}
fn default_spacing() -> f32 {
    2.0 * Sector::SIZE
}
fn default_steps() -> u64 {
    256
}
fn default_sea_level() -> f32 {
    1.0
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            dim: default_dim(),
            spacing: default_spacing(),
            steps: default_steps(),
            sea_level: default_sea_level(),
            noise: NoiseConfig::default(),
        }
    }
}

pub fn load_run_config(path: &Path) -> Result<RunConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: RunConfig = toml::from_str(&s)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RunConfig = toml::from_str("").expect("empty config");
        assert_eq!(cfg.seed, 1337);
        assert_eq!(cfg.dim, 192);
        assert_eq!(cfg.spacing, 0.5);
        assert_eq!(cfg.steps, 256);
        assert_eq!(cfg.sea_level, 1.0);
        assert_eq!(cfg.noise.height_multiplier, 20.001);
    }

    #[test]
    fn noise_tables_parse_at_top_level() {
        let cfg: RunConfig = toml::from_str(
            r#"
seed = 7
dim = 32
sea_level = 2.5

height_power = 3.0

[height_octave1]
amp = 2.0
freq_x = 8.0
freq_z = 8.0
"#,
        )
        .expect("config");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.dim, 32);
        assert_eq!(cfg.sea_level, 2.5);
        assert_eq!(cfg.noise.height_power, 3.0);
        assert_eq!(cfg.noise.height_octave1.amp, 2.0);
        assert_eq!(cfg.noise.height_octave1.freq_x, 8.0);
        // Untouched octaves keep their defaults.
        assert_eq!(cfg.noise.height_octave2.amp, 0.5);
    }
}
