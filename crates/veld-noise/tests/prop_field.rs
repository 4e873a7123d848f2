use proptest::prelude::*;
use veld_noise::{HeightOctave, NoiseField, NoiseParams};

fn arb_octave() -> impl Strategy<Value = HeightOctave> {
    (-2.0f32..2.0, 0.1f32..60.0, 0.1f32..60.0)
        .prop_map(|(amp, fx, fz)| HeightOctave::new(amp, fx, fz))
}

fn arb_params() -> impl Strategy<Value = NoiseParams> {
    (
        arb_octave(),
        arb_octave(),
        arb_octave(),
        0.1f32..4.0,
        arb_octave(),
        0.0f32..40.0,
    )
        .prop_map(|(o1, o2, o3, power, seabed, mult)| NoiseParams {
            height_octave1: o1,
            height_octave2: o2,
            height_octave3: o3,
            height_power: power,
            seabed_octave: seabed,
            height_multiplier: mult,
        })
}

proptest! {
    // Sampling is total: any finite coordinate and any sane parameter set
    // yields finite height and clamped temperature.
    #[test]
    fn sample_total_and_clamped(
        params in arb_params(),
        seed in any::<i32>(),
        x in -1e4f32..1e4,
        z in -1e4f32..1e4,
    ) {
        let field = NoiseField::new(seed);
        let (h, t) = field.sample(&params, x, z);
        prop_assert!(h.is_finite());
        prop_assert!(t.is_finite());
        prop_assert!((0.0..=100.0).contains(&t));
    }

    // Same (seed, params, x, z) twice is bit-identical, across field instances
    #[test]
    fn sample_reproducible(
        params in arb_params(),
        seed in any::<i32>(),
        x in -1e4f32..1e4,
        z in -1e4f32..1e4,
    ) {
        let a = NoiseField::new(seed);
        let b = NoiseField::new(seed);
        prop_assert_eq!(a.sample(&params, x, z), b.sample(&params, x, z));
    }

    // Doubling the multiplier doubles the height exactly
    #[test]
    fn multiplier_scales_height_linearly(
        seed in any::<i32>(),
        x in -1e3f32..1e3,
        z in -1e3f32..1e3,
    ) {
        let base = NoiseParams::default();
        let doubled = NoiseParams {
            height_multiplier: base.height_multiplier * 2.0,
            ..base.clone()
        };
        let field = NoiseField::new(seed);
        let (h1, _) = field.sample(&base, x, z);
        let (h2, _) = field.sample(&doubled, x, z);
        prop_assert_eq!(h2, h1 * 2.0);
    }
}
