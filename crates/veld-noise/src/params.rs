use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One height octave: an amplitude and a per-axis frequency multiplier
/// applied on top of the generator's base frequency.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct HeightOctave {
    #[serde(default = "default_octave_amp")]
    pub amp: f32,
    #[serde(default = "default_octave_freq")]
    pub freq_x: f32,
    #[serde(default = "default_octave_freq")]
    pub freq_z: f32,
}

impl HeightOctave {
    pub const fn new(amp: f32, freq_x: f32, freq_z: f32) -> Self {
        Self {
            amp,
            freq_x,
            freq_z,
        }
    }
}

fn default_octave_amp() -> f32 {
    1.0
}
fn default_octave_freq() -> f32 {
    1.0
}

impl Default for HeightOctave {
    fn default() -> Self {
        Self {
            amp: default_octave_amp(),
            freq_x: default_octave_freq(),
            freq_z: default_octave_freq(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoiseConfig {
    #[serde(default = "default_height_octave1")]
    pub height_octave1: HeightOctave,
    #[serde(default = "default_height_octave2")]
    pub height_octave2: HeightOctave,
    #[serde(default = "default_height_octave3")]
    pub height_octave3: HeightOctave,
    #[serde(default = "default_height_power")]
    pub height_power: f32,
    #[serde(default = "default_seabed_octave")]
    pub seabed_octave: HeightOctave,
    #[serde(default = "default_height_multiplier")]
    pub height_multiplier: f32,
}

fn default_height_octave1() -> HeightOctave {
    HeightOctave::new(1.0, 10.0, 10.0)
}
fn default_height_octave2() -> HeightOctave {
    HeightOctave::new(0.5, 20.0, 20.0)
}
fn default_height_octave3() -> HeightOctave {
    HeightOctave::new(0.25, 50.0, 30.0)
}
fn default_height_power() -> f32 {
    2.33334
}
fn default_seabed_octave() -> HeightOctave {
    HeightOctave::new(0.25, 5.0, 5.0)
}
fn default_height_multiplier() -> f32 {
    20.001
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            height_octave1: default_height_octave1(),
            height_octave2: default_height_octave2(),
            height_octave3: default_height_octave3(),
            height_power: default_height_power(),
            seabed_octave: default_seabed_octave(),
            height_multiplier: default_height_multiplier(),
        }
    }
}

/// Parameter snapshot handed to the sampling loops.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    pub height_octave1: HeightOctave,
    pub height_octave2: HeightOctave,
    pub height_octave3: HeightOctave,
    pub height_power: f32,
    pub seabed_octave: HeightOctave,
    pub height_multiplier: f32,
}

impl NoiseParams {
    pub fn from_config(cfg: &NoiseConfig) -> Self {
        Self {
            height_octave1: cfg.height_octave1,
            height_octave2: cfg.height_octave2,
            height_octave3: cfg.height_octave3,
            height_power: cfg.height_power,
            seabed_octave: cfg.seabed_octave,
            height_multiplier: cfg.height_multiplier,
        }
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::from_config(&NoiseConfig::default())
    }
}

pub fn load_params_from_path(path: &Path) -> Result<NoiseParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: NoiseConfig = toml::from_str(&s)?;
    Ok(NoiseParams::from_config(&cfg))
}
