use super::common::{channel, Palette, Rgb};
use std::f64::consts::PI;

/// Rainbow palette - full spectrum with the three channels shifted by a third
/// of a cycle each
pub(crate) struct Rainbow;

impl Palette for Rainbow {
    fn color(&self, phase: f64) -> Rgb {
        Rgb::new(
            channel(phase, 0.0, 127.0, 128.0),
            channel(phase, 2.0 * PI / 3.0, 127.0, 128.0),
            channel(phase, 4.0 * PI / 3.0, 127.0, 128.0),
        )
    }
}
