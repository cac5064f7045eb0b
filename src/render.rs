use crate::config::Config;
use crate::palette::{palette_for, Palette, Rgb};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Number of re-renders of a line when animation is enabled.
const ANIMATION_FRAMES: usize = 20;

/// Speed increment applied per animation frame.
const FRAME_SPEED_STEP: f64 = 0.1;

/// Blocking delay between animation frames. Injectable so frame timing is
/// testable without real waits.
pub(crate) trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper that blocks the thread.
pub(crate) struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Writes colorized lines, either directly or as a bounded animation loop.
pub(crate) struct Renderer {
    palette: Box<dyn Palette>,
    config: Config,
}

impl Renderer {
    pub(crate) fn new(config: Config) -> Self {
        let palette = palette_for(config.mode);
        Self { palette, config }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Render a line once, one escape sequence per code point, and commit it
    /// with a newline. `offset` is the index of the line's first code point
    /// within the stream.
    pub(crate) fn render_line<W: Write>(
        &self,
        out: &mut W,
        line: &str,
        offset: usize,
    ) -> io::Result<()> {
        self.paint_frame(out, line, offset, self.config.speed)?;
        out.write_all(b"\n")
    }

    /// Re-render a line over a fixed number of frames, shifting the phase a
    /// little further each frame. The cursor returns to the start of the line
    /// between frames; only the final newline commits it.
    pub(crate) fn animate_line<W: Write>(
        &self,
        out: &mut W,
        line: &str,
        offset: usize,
        sleeper: &dyn Sleeper,
    ) -> io::Result<()> {
        for frame in 0..ANIMATION_FRAMES {
            let speed = self.config.speed + frame as f64 * FRAME_SPEED_STEP;
            out.write_all(b"\r")?;
            self.paint_frame(out, line, offset, speed)?;
            out.flush()?;
            sleeper.sleep(self.config.delay);
        }
        out.write_all(b"\n")
    }

    fn paint_frame<W: Write>(
        &self,
        out: &mut W,
        line: &str,
        offset: usize,
        speed: f64,
    ) -> io::Result<()> {
        for (index, ch) in line.chars().enumerate() {
            let phase = self.config.phase(offset + index, speed);
            write_colored(out, ch, self.palette.color(phase))?;
        }
        Ok(())
    }
}

/// Emit one code point wrapped in a 24-bit foreground escape sequence.
fn write_colored<W: Write>(out: &mut W, ch: char, color: Rgb) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, ch)
}
