use rayon::prelude::*;

use crate::raster::RasterTarget;
use crate::rectangle::{Rect, split_rows};

/// Row-major grid of one byte per pixel, 0 for background and 1 for marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl RasterBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Wraps existing cells, `None` when the length does not match the dimensions.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = 1;
    }

    pub fn is_marked(&self, x: usize, y: usize) -> bool {
        self.get_pixel(x, y).is_some_and(|cell| cell != 0)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Coordinates of every marked cell in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Splits the buffer into horizontal strips that can be written independently.
    pub fn bands(&mut self, parts: usize) -> Vec<RasterBand<'_>> {
        let (width, canvas_height) = (self.width, self.height);
        let rects = split_rows(width, canvas_height, parts);
        let mut rest: &mut [u8] = &mut self.cells;
        let mut bands = Vec::with_capacity(rects.len());
        for rect in rects {
            let (cells, tail) = std::mem::take(&mut rest).split_at_mut(rect.height() as usize * width);
            rest = tail;
            bands.push(RasterBand { rect, canvas_height, cells });
        }
        bands
    }

    /// Runs `op` on every strip of [`RasterBuffer::bands`] on the rayon pool.
    pub fn par_bands<F>(&mut self, parts: usize, op: F)
    where
        F: Fn(&mut RasterBand<'_>) + Sync + Send,
    {
        self.bands(parts).par_iter_mut().for_each(|band| op(band));
    }
}

impl RasterTarget for RasterBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn rows(&self) -> (usize, usize) {
        (0, self.height)
    }

    fn mark_run(&mut self, y: i32, start_x: i32, end_x: i32) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        let Some((start, end)) = clip_run(self.width, start_x, end_x) else {
            return;
        };
        let row = y as usize * self.width;
        self.cells[row + start..=row + end].fill(1);
    }
}

/// Borrowed strip of whole rows of a [`RasterBuffer`].
///
/// `rect` is in full-buffer coordinates; writes outside its rows are dropped.
#[derive(Debug)]
pub struct RasterBand<'a> {
    pub rect: Rect,
    canvas_height: usize,
    cells: &'a mut [u8],
}

impl RasterBand<'_> {
    pub fn cells(&self) -> &[u8] {
        &*self.cells
    }
}

impl RasterTarget for RasterBand<'_> {
    fn width(&self) -> usize {
        self.rect.width() as usize
    }

    fn height(&self) -> usize {
        self.canvas_height
    }

    fn rows(&self) -> (usize, usize) {
        (self.rect.min_y as usize, self.rect.max_y as usize)
    }

    fn mark_run(&mut self, y: i32, start_x: i32, end_x: i32) {
        if y < self.rect.min_y as i32 || y >= self.rect.max_y as i32 {
            return;
        }
        let width = self.width();
        let Some((start, end)) = clip_run(width, start_x, end_x) else {
            return;
        };
        let row = (y as usize - self.rect.min_y as usize) * width;
        self.cells[row + start..=row + end].fill(1);
    }
}

/// Clamps the inclusive run `start_x..=end_x` to `0..width`.
fn clip_run(width: usize, start_x: i32, end_x: i32) -> Option<(usize, usize)> {
    if width == 0 || end_x < 0 || start_x > end_x || start_x as i64 >= width as i64 {
        return None;
    }
    let start = start_x.max(0) as usize;
    let end = (end_x as usize).min(width - 1);
    Some((start, end))
}
