//! Outline and fill drawing on top of the scan converter.

use log::{debug, trace, warn};

use crate::error::RasterError;
use crate::geometry::{Band, Span, scan_convert};
use crate::point2d::Point2D;
use crate::triangle::Triangle2D;

/// Anything the rasterizer can mark cells in.
///
/// Coordinates are always those of the full canvas. `width` and `height`
/// describe that canvas, `rows` the half-open range of rows this target owns.
pub trait RasterTarget {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn rows(&self) -> (usize, usize);

    /// Sets cells `start_x..=end_x` of row `y` to 1, dropping whatever falls
    /// outside the row or the owned rows.
    fn mark_run(&mut self, y: i32, start_x: i32, end_x: i32);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Outline,
    Fill,
}

/// Marks the two span boundaries, each thickened by the truncated slope of its edge.
///
/// A non-negative slope extends the boundary to the right, a negative one to the left.
#[inline(always)]
pub fn outline_row<T: RasterTarget + ?Sized>(target: &mut T, span: &Span) {
    mark_boundary(target, span.y, span.left_x, span.left_slope);
    mark_boundary(target, span.y, span.left_x + span.len(), span.right_slope);
}

#[inline(always)]
fn mark_boundary<T: RasterTarget + ?Sized>(target: &mut T, y: i32, x: i32, slope: f32) {
    if slope >= 0.0 {
        target.mark_run(y, x, x + slope as i32);
    } else {
        target.mark_run(y, x - (-slope) as i32, x);
    }
}

/// Marks `left_x..=right_x`; the end is inclusive so a fill covers one more
/// column than the span's length.
#[inline(always)]
pub fn fill_row<T: RasterTarget + ?Sized>(target: &mut T, span: &Span) {
    target.mark_run(span.y, span.left_x, span.left_x + span.len());
}

/// Validates the triangle against the target canvas and returns its bands.
///
/// Nothing is written when this fails.
pub fn prepare<T: RasterTarget + ?Sized>(
    target: &T,
    triangle: &Triangle2D,
) -> Result<Vec<Band>, RasterError> {
    let result = triangle
        .check_bounds(target.width(), target.height())
        .and_then(|()| scan_convert(triangle));
    if let Err(err) = &result {
        warn!("rejected triangle {triangle}: {err}");
    }
    result
}

/// Draws already validated bands, limited to the rows the target owns.
pub fn draw_bands<T: RasterTarget + ?Sized>(target: &mut T, bands: &[Band], mode: DrawMode) {
    let (min_y, max_y) = target.rows();
    for band in bands {
        let band = band.clipped(min_y as i32, max_y as i32);
        for span in band.spans() {
            trace!("span y {} x {}..{}", span.y, span.left_x, span.right_x);
            match mode {
                DrawMode::Outline => outline_row(target, &span),
                DrawMode::Fill => fill_row(target, &span),
            }
        }
    }
}

pub fn draw_triangle<T: RasterTarget + ?Sized>(
    target: &mut T,
    mode: DrawMode,
    triangle: &Triangle2D,
) -> Result<(), RasterError> {
    let bands = prepare(target, triangle)?;
    debug!("{mode:?} {triangle} in {} band(s)", bands.len());
    draw_bands(target, &bands, mode);
    Ok(())
}

pub fn draw_triangle_outline<T: RasterTarget + ?Sized>(
    target: &mut T,
    v1: Point2D,
    v2: Point2D,
    v3: Point2D,
) -> Result<(), RasterError> {
    draw_triangle(target, DrawMode::Outline, &Triangle2D::new(v1, v2, v3))
}

pub fn draw_triangle_fill<T: RasterTarget + ?Sized>(
    target: &mut T,
    v1: Point2D,
    v2: Point2D,
    v3: Point2D,
) -> Result<(), RasterError> {
    draw_triangle(target, DrawMode::Fill, &Triangle2D::new(v1, v2, v3))
}
