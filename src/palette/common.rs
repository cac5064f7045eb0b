/// A 24-bit color produced by a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub(crate) fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Trait for per-character color functions.
pub(crate) trait Palette {
    /// Compute the color for a single code point given its phase angle.
    fn color(&self, phase: f64) -> Rgb;
}

/// Evaluate one sine channel: `sin(phase + shift) * amplitude + center`,
/// clamped to the byte range before truncation. The amplitude/center pairs
/// used by the built-in palettes stay in range on their own; the clamp guards
/// against extreme user-supplied frequency or spread values.
pub(crate) fn channel(phase: f64, shift: f64, amplitude: f64, center: f64) -> u8 {
    ((phase + shift).sin() * amplitude + center).clamp(0.0, 255.0) as u8
}
