use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::params::{HeightOctave, NoiseParams};

// Base frequency shared by all terrain octaves; per-octave freq_x/freq_z
// multiply on top of this.
const BASE_FREQ: f32 = 0.01;
// Climate skips the octave multipliers, so at the same base it varies
// 10-50x more slowly than the relief octaves.
const CLIMATE_FREQ: f32 = 0.01;

/// Owned noise generators for one world seed. Heights and temperatures are a
/// pure function of (seed, params, x, z); the same inputs always reproduce the
/// same outputs bit for bit.
pub struct NoiseField {
    terrain: FastNoiseLite,
    climate: FastNoiseLite,
    seed: i32,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut terrain = FastNoiseLite::with_seed(seed);
        terrain.set_noise_type(Some(NoiseType::OpenSimplex2));
        terrain.set_frequency(Some(BASE_FREQ));
        let mut climate = FastNoiseLite::with_seed(seed ^ 0x1203_5F31);
        climate.set_noise_type(Some(NoiseType::OpenSimplex2));
        climate.set_frequency(Some(CLIMATE_FREQ));
        Self {
            terrain,
            climate,
            seed,
        }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Height and temperature at a world-space (x, z).
    ///
    /// Height: three weighted octaves summed, clamped to >= 0 before the
    /// sharpening power (negative bases and fractional exponents do not mix),
    /// then a broad sea-bed octave subtracted to carve basins, then scaled.
    /// Temperature: one climate octave remapped to 0..100, cooled by
    /// 2 * height, clamped to [0, 100].
    pub fn sample(&self, params: &NoiseParams, x: f32, z: f32) -> (f32, f32) {
        let relief = self.octave(&params.height_octave1, x, z)
            + self.octave(&params.height_octave2, x, z)
            + self.octave(&params.height_octave3, x, z);
        let sharpened = relief.max(0.0).powf(params.height_power);
        let carved = sharpened - self.octave(&params.seabed_octave, x, z);
        let height = carved * params.height_multiplier;

        let climate01 = self.climate.get_noise_2d(x, z) * 0.5 + 0.5;
        let temperature = (climate01 * 100.0 - 2.0 * height).clamp(0.0, 100.0);
        (height, temperature)
    }

    #[inline]
    fn octave(&self, o: &HeightOctave, x: f32, z: f32) -> f32 {
        o.amp * self.terrain.get_noise_2d(x * o.freq_x, z * o.freq_z)
    }
}
