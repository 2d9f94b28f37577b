use log::debug;

use crate::error::RasterError;
use crate::geometry::Band;
use crate::raster::{DrawMode, draw_bands, prepare};
use crate::rectangle::default_parts;
use crate::screen::RasterBuffer;
use crate::triangle::Triangle2D;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DrawCommand {
    pub mode: DrawMode,
    pub triangle: Triangle2D,
}

impl DrawCommand {
    pub const fn outline(triangle: Triangle2D) -> Self {
        DrawCommand { mode: DrawMode::Outline, triangle }
    }

    pub const fn fill(triangle: Triangle2D) -> Self {
        DrawCommand { mode: DrawMode::Fill, triangle }
    }
}

// Scan-convert every command up front so a bad one fails before any write
fn prepare_all(
    buffer: &RasterBuffer,
    commands: &[DrawCommand],
) -> Result<Vec<(DrawMode, Vec<Band>)>, RasterError> {
    commands
        .iter()
        .map(|command| prepare(buffer, &command.triangle).map(|bands| (command.mode, bands)))
        .collect()
}

/// Draws the commands in order on the calling thread.
pub fn render_sequential(buffer: &mut RasterBuffer, commands: &[DrawCommand]) -> Result<(), RasterError> {
    let prepared = prepare_all(buffer, commands)?;
    for (mode, bands) in &prepared {
        draw_bands(buffer, bands, *mode);
    }
    Ok(())
}

/// Draws the commands with one rayon task per horizontal strip of the buffer.
///
/// Strips own disjoint rows, so every task writes without synchronisation and
/// the result matches [`render_sequential`] cell for cell. `threads` picks the
/// strip count, defaulting to the number of logical cores.
pub fn render_parallel(
    buffer: &mut RasterBuffer,
    commands: &[DrawCommand],
    threads: Option<usize>,
) -> Result<(), RasterError> {
    let prepared = prepare_all(buffer, commands)?;
    let parts = default_parts(threads.unwrap_or_else(num_cpus::get));
    debug!("{} command(s) over {parts} strip(s)", prepared.len());

    buffer.par_bands(parts, |band| {
        for (mode, bands) in &prepared {
            draw_bands(band, bands, *mode);
        }
    });
    Ok(())
}
