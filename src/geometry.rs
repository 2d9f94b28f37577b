use log::trace;

use crate::error::RasterError;
use crate::point2d::Point2D;
use crate::triangle::Triangle2D;

/// Rounds half up after truncating toward zero.
///
/// The remainder is taken against the truncated value, so it is never positive
/// for negative inputs and those always round toward zero: `-2.7` gives `-2`.
#[inline(always)]
pub fn round_half_up(value: f32) -> i32 {
    let remainder = value - value.trunc();
    if remainder >= 0.5 {
        (value + 1.0) as i32
    } else {
        value as i32
    }
}

/// Horizontal displacement per scanline from `from` to `to`.
///
/// `None` for a horizontal edge.
#[inline(always)]
pub fn edge_slope(from: Point2D, to: Point2D) -> Option<f32> {
    let dy = to.y - from.y;
    if dy == 0 {
        return None;
    }
    Some((to.x - from.x) as f32 / dy as f32)
}

/// A triangle edge walked one scanline at a time from `origin`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub origin: Point2D,
    pub slope: f32,
}

impl Edge {
    #[inline(always)]
    pub fn x_at(&self, y: i32) -> i32 {
        self.origin.x + round_half_up(self.slope * (y - self.origin.y) as f32)
    }
}

/// Horizontal extent of a triangle on one scanline.
///
/// The slopes are the unrounded slopes of the two edges bounding the span.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Span {
    pub y: i32,
    pub left_x: i32,
    pub right_x: i32,
    pub left_slope: f32,
    pub right_slope: f32,
}

impl Span {
    pub fn len(&self) -> i32 {
        self.right_x - self.left_x
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scanlines `start_y..end_y` between a pair of edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub start_y: i32,
    pub end_y: i32,
    pub left: Edge,
    pub right: Edge,
}

impl Band {
    pub fn rows(&self) -> std::ops::Range<i32> {
        self.start_y..self.end_y
    }

    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.rows().map(move |y| Span {
            y,
            left_x: self.left.x_at(y),
            right_x: self.right.x_at(y),
            left_slope: self.left.slope,
            right_slope: self.right.slope,
        })
    }

    /// Same band limited to the scanlines in `min_y..max_y`.
    pub fn clipped(&self, min_y: i32, max_y: i32) -> Band {
        let start_y = self.start_y.max(min_y);
        Band {
            start_y,
            end_y: self.end_y.min(max_y).max(start_y),
            left: self.left,
            right: self.right,
        }
    }
}

/// Splits a triangle into its upper and lower bands.
///
/// The two edges leaving the top vertex are ordered by slope once; the smaller
/// slope bounds the upper band on the left. If that left edge is the one ending
/// at the middle vertex, the lower band's left boundary switches to
/// middle-to-bottom and the right one keeps the top edge. Otherwise the left
/// edge carries on and middle-to-bottom becomes the right boundary.
///
/// The switch is decided from which edge was picked, not by comparing the left
/// edge's rounded x at the middle row with the middle vertex: rounding toward
/// zero can miss the vertex by a pixel and send the lower band down the wrong
/// edge.
///
/// Horizontal edges skip their band instead of dividing by zero. A triangle
/// with all three vertices on one row is rejected.
pub fn scan_convert(triangle: &Triangle2D) -> Result<Vec<Band>, RasterError> {
    let Triangle2D { a: p1, b: p2, c: p3 } = triangle.ordered();

    let Some(slope_top_bot) = edge_slope(p1, p3) else {
        return Err(RasterError::DegenerateTriangleEdge { triangle: *triangle });
    };
    let top_bot = Edge { origin: p1, slope: slope_top_bot };

    let mut bands = Vec::with_capacity(2);

    let Some(slope_top_mid) = edge_slope(p1, p2) else {
        // Flat top: ordering put p1 left of p2.
        if let Some(slope_mid_bot) = edge_slope(p2, p3) {
            bands.push(Band {
                start_y: p2.y,
                end_y: p3.y,
                left: top_bot,
                right: Edge { origin: p2, slope: slope_mid_bot },
            });
        }
        return Ok(bands);
    };

    let middle_on_left = slope_top_mid <= slope_top_bot;
    let (slope_low, slope_high) = if middle_on_left {
        (slope_top_mid, slope_top_bot)
    } else {
        (slope_top_bot, slope_top_mid)
    };
    let low = Edge { origin: p1, slope: slope_low };
    let high = Edge { origin: p1, slope: slope_high };

    bands.push(Band { start_y: p1.y, end_y: p2.y, left: low, right: high });

    if let Some(slope_mid_bot) = edge_slope(p2, p3) {
        let mid_bot = Edge { origin: p2, slope: slope_mid_bot };
        trace!("lower band from {p2}, middle vertex on the left: {middle_on_left}");
        let (left, right) = if middle_on_left {
            (mid_bot, high)
        } else {
            (low, mid_bot)
        };
        bands.push(Band { start_y: p2.y, end_y: p3.y, left, right });
    }

    Ok(bands)
}
