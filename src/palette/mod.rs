mod common;

// Individual palette modules
mod fire;
mod matrix;
mod ocean;
mod pastel;
mod rainbow;

pub(crate) use common::{Palette, Rgb};

use crate::config::ColorMode;

/// Get the palette implementation for a given color mode
pub(crate) fn palette_for(mode: ColorMode) -> Box<dyn Palette> {
    match mode {
        ColorMode::Rainbow => Box::new(rainbow::Rainbow),
        ColorMode::Fire => Box::new(fire::Fire),
        ColorMode::Ocean => Box::new(ocean::Ocean),
        ColorMode::Matrix => Box::new(matrix::Matrix),
        ColorMode::Pastel => Box::new(pastel::Pastel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn phases() -> impl Iterator<Item = f64> {
        // First 200 code points at the default frequency/spread
        (0..200).map(|i| 0.1 * i as f64)
    }

    #[rstest]
    #[case::rainbow(ColorMode::Rainbow, [255, 255, 255])]
    #[case::fire(ColorMode::Fire, [255, 128, 64])]
    #[case::ocean(ColorMode::Ocean, [128, 255, 255])]
    #[case::matrix(ColorMode::Matrix, [0, 255, 76])]
    #[case::pastel(ColorMode::Pastel, [255, 255, 255])]
    fn channels_stay_within_mode_bounds(#[case] mode: ColorMode, #[case] max: [u8; 3]) {
        let palette = palette_for(mode);
        for phase in phases().chain([1e9, -1e9]) {
            let color = palette.color(phase);
            assert!(color.r <= max[0], "r={} at {phase}", color.r);
            assert!(color.g <= max[1], "g={} at {phase}", color.g);
            assert!(color.b <= max[2], "b={} at {phase}", color.b);
        }
    }

    #[test]
    fn channel_clamps_out_of_range_amplitudes() {
        use super::common::channel;
        assert_eq!(channel(PI / 2.0, 0.0, 1000.0, 0.0), 255);
        assert_eq!(channel(-PI / 2.0, 0.0, 1000.0, 0.0), 0);
    }

    #[test]
    fn rainbow_channels_are_one_third_cycle_apart() {
        let palette = palette_for(ColorMode::Rainbow);
        for phase in phases() {
            let here = palette.color(phase);
            let shifted = palette.color(phase + 2.0 * PI / 3.0);
            assert_eq!(here.g, shifted.r);
            assert_eq!(here.b, shifted.g);
        }
    }

    #[test]
    fn matrix_red_is_zero_and_blue_tracks_green() {
        let palette = palette_for(ColorMode::Matrix);
        for phase in phases() {
            let color = palette.color(phase);
            assert_eq!(color.r, 0);
            assert_eq!(color.b, (f64::from(color.g) * 0.3) as u8);
        }
    }

    #[test]
    fn pastel_stays_washed_out() {
        let palette = palette_for(ColorMode::Pastel);
        for phase in phases() {
            let color = palette.color(phase);
            for value in [color.r, color.g, color.b] {
                assert!((128..=255).contains(&value), "got {value} at {phase}");
            }
        }
    }
}
