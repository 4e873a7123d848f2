//! Multi-octave terrain noise: height/temperature sampling and tunable parameters.
#![forbid(unsafe_code)]

pub mod field;
pub mod params;

pub use field::NoiseField;
pub use params::{HeightOctave, NoiseConfig, NoiseParams, load_params_from_path};
