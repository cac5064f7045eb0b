use super::common::{channel, Palette, Rgb};
use std::f64::consts::PI;

/// Ocean palette - the Fire shape mirrored toward the blue channel
pub(crate) struct Ocean;

impl Palette for Ocean {
    fn color(&self, phase: f64) -> Rgb {
        Rgb::new(
            channel(phase, PI, 64.0, 64.0),
            channel(phase, PI / 2.0, 127.0, 128.0),
            channel(phase, 0.0, 127.0, 128.0),
        )
    }
}
