use crate::render::{Renderer, Sleeper};
use log::error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Colorize one input source line by line. The code-point offset runs across
/// the whole source so the color phase continues smoothly over line
/// boundaries; a trailing line without a newline is still processed.
pub(crate) fn process_source<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    renderer: &Renderer,
    sleeper: &dyn Sleeper,
) -> io::Result<()> {
    let mut offset = 0;
    for line in reader.lines() {
        let line = line?;
        if renderer.config().animate {
            renderer.animate_line(out, &line, offset, sleeper)?;
        } else {
            renderer.render_line(out, &line, offset)?;
        }
        offset += line.chars().count();
    }
    Ok(())
}

/// Colorize each file in turn. A file that fails to open or read is reported
/// and skipped; the remaining files are still processed.
pub(crate) fn process_files<W: Write>(
    paths: &[PathBuf],
    out: &mut W,
    renderer: &Renderer,
    sleeper: &dyn Sleeper,
) {
    for path in paths {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                error!("cannot open {}: {e}", path.display());
                continue;
            }
        };
        if let Err(e) = process_source(BufReader::new(file), out, renderer, sleeper) {
            error!("failed to process {}: {e}", path.display());
        }
    }
}
