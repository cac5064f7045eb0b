use super::common::{channel, Palette, Rgb};

/// Matrix palette - digital-rain green with a dim blue tint derived from the
/// green channel
pub(crate) struct Matrix;

impl Palette for Matrix {
    fn color(&self, phase: f64) -> Rgb {
        let green = channel(phase, 0.0, 127.0, 128.0);
        // Blue derives from the already-truncated green byte, not the float
        let blue = (f64::from(green) * 0.3) as u8;
        Rgb::new(0, green, blue)
    }
}
