use super::common::{channel, Palette, Rgb};
use std::f64::consts::PI;

/// Fire palette - asymmetric amplitudes biased toward the red channel for a
/// warm flame gradient
pub(crate) struct Fire;

impl Palette for Fire {
    fn color(&self, phase: f64) -> Rgb {
        Rgb::new(
            channel(phase, 0.0, 127.0, 128.0),
            channel(phase, PI / 2.0, 64.0, 64.0),
            channel(phase, PI, 32.0, 32.0),
        )
    }
}
