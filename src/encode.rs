//! File output for a [`RasterBuffer`]: plain text, PPM (P3) and PNG.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use image::{Rgb, RgbImage};

use crate::screen::RasterBuffer;

const PPM_BACKGROUND: &[u8] = b"0 0 0   ";
const PPM_MARKED: &[u8] = b"255 255 255   ";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Txt,
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            other => Err(anyhow!("unknown output format {other:?}")),
        }
    }
}

/// One character per cell: space for background, `1` for marked, newline per row.
pub fn encode_txt<W: Write>(buffer: &RasterBuffer, mut out: W) -> Result<()> {
    let mut line = Vec::with_capacity(buffer.width() + 1);
    for y in 0..buffer.height() {
        line.clear();
        line.extend(buffer.row(y).iter().map(|&cell| if cell == 0 { b' ' } else { b'1' }));
        line.push(b'\n');
        out.write_all(&line)?;
    }
    out.flush()?;
    Ok(())
}

/// Reads back the output of [`encode_txt`].
pub fn decode_txt<R: BufRead>(input: R) -> Result<RasterBuffer> {
    let mut width = None;
    let mut cells = Vec::new();
    let mut height = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let row_width = line.len();
        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                bail!("line {}: {row_width} cells, expected {expected}", index + 1)
            }
            Some(_) => {}
        }
        for (x, byte) in line.bytes().enumerate() {
            cells.push(match byte {
                b' ' => 0,
                b'1' => 1,
                other => bail!("line {}, column {}: unexpected byte {other:#04x}", index + 1, x + 1),
            });
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    RasterBuffer::from_cells(width, height, cells)
        .ok_or_else(|| anyhow!("cell count does not match {width}x{height}"))
}

/// Plain PPM with a fixed three line header and one RGB triplet per cell.
pub fn encode_ppm<W: Write>(buffer: &RasterBuffer, mut out: W) -> Result<()> {
    out.write_all(b"P3\n")?;
    out.write_all(format!("{} {}\n", buffer.width(), buffer.height()).as_bytes())?;
    out.write_all(b"255\n")?;
    for y in 0..buffer.height() {
        for &cell in buffer.row(y) {
            out.write_all(if cell == 0 { PPM_BACKGROUND } else { PPM_MARKED })?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Black background, white marks.
pub fn to_rgb_image(buffer: &RasterBuffer) -> RgbImage {
    RgbImage::from_fn(buffer.width() as u32, buffer.height() as u32, |x, y| {
        if buffer.is_marked(x as usize, y as usize) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

pub fn write_png<P: AsRef<Path>>(buffer: &RasterBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    to_rgb_image(buffer)
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_file<P: AsRef<Path>>(buffer: &RasterBuffer, path: P, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    if format == OutputFormat::Png {
        return write_png(buffer, path);
    }
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    let written = match format {
        OutputFormat::Txt => encode_txt(buffer, writer),
        _ => encode_ppm(buffer, writer),
    };
    written.with_context(|| format!("failed to write {}", path.display()))
}
