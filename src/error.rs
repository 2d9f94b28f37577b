use crate::point2d::Point2D;
use crate::triangle::Triangle2D;

/// Reasons a triangle is rejected before anything is written to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Every edge of the triangle is horizontal, so no edge has a usable slope.
    #[error("triangle {triangle} has no vertical extent")]
    DegenerateTriangleEdge { triangle: Triangle2D },

    /// A vertex lies outside the `width` x `height` buffer.
    #[error("vertex {vertex} lies outside the {width}x{height} buffer")]
    OutOfBoundsWrite {
        vertex: Point2D,
        width: usize,
        height: usize,
    },
}
