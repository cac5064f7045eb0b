use super::common::{channel, Palette, Rgb};
use std::f64::consts::PI;

/// Pastel palette - rainbow phase shifts with a smaller amplitude around a
/// bright center for a washed-out look
pub(crate) struct Pastel;

impl Palette for Pastel {
    fn color(&self, phase: f64) -> Rgb {
        Rgb::new(
            channel(phase, 0.0, 64.0, 192.0),
            channel(phase, 2.0 * PI / 3.0, 64.0, 192.0),
            channel(phase, 4.0 * PI / 3.0, 64.0, 192.0),
        )
    }
}
