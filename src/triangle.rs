use std::fmt;

use crate::error::RasterError;
use crate::point2d::Point2D;

/// Three vertices, unordered until [`Triangle2D::ordered`] is called.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle2D {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle2D {
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Triangle2D { a, b, c }
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Same triangle with `a.y <= b.y <= c.y`, see [`order_by_y`].
    pub fn ordered(&self) -> Triangle2D {
        let (a, b, c) = order_by_y(self.a, self.b, self.c);
        Triangle2D { a, b, c }
    }

    /// Checks that every vertex addresses a cell of a `width` x `height` buffer.
    pub fn check_bounds(&self, width: usize, height: usize) -> Result<(), RasterError> {
        for vertex in self.vertices() {
            let inside = vertex.x >= 0
                && vertex.y >= 0
                && (vertex.x as usize) < width
                && (vertex.y as usize) < height;
            if !inside {
                return Err(RasterError::OutOfBoundsWrite { vertex, width, height });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Triangle2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.a, self.b, self.c)
    }
}

/// Sorts three vertices top to bottom.
///
/// Vertices sharing a row are ordered left to right, so the result is fully
/// determined by the input set regardless of argument order.
pub fn order_by_y(p1: Point2D, p2: Point2D, p3: Point2D) -> (Point2D, Point2D, Point2D) {
    let mut points = [p1, p2, p3];
    for i in 0..points.len() - 1 {
        for j in i + 1..points.len() {
            if (points[j].y, points[j].x) < (points[i].y, points[i].x) {
                points.swap(i, j);
            }
        }
    }
    (points[0], points[1], points[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn orders_by_row() {
        assert_eq!(
            order_by_y(p(20, 20), p(50, 400), p(200, 90)),
            (p(20, 20), p(200, 90), p(50, 400))
        );
        assert_eq!(
            order_by_y(p(0, 9), p(0, 5), p(0, 1)),
            (p(0, 1), p(0, 5), p(0, 9))
        );
    }

    #[test]
    fn ties_are_broken_by_column() {
        let expected = (p(10, 10), p(30, 10), p(20, 30));
        assert_eq!(order_by_y(p(30, 10), p(10, 10), p(20, 30)), expected);
        assert_eq!(order_by_y(p(20, 30), p(30, 10), p(10, 10)), expected);
        assert_eq!(order_by_y(p(10, 10), p(20, 30), p(30, 10)), expected);
    }

    #[test]
    fn every_permutation_gives_the_same_order() {
        let (a, b, c) = (p(5, 3), p(-2, 3), p(7, -1));
        let expected = order_by_y(a, b, c);
        for (x, y, z) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            assert_eq!(order_by_y(x, y, z), expected);
        }
        assert!(expected.0.y <= expected.1.y && expected.1.y <= expected.2.y);
    }

    #[test]
    fn bounds() {
        let tri = Triangle2D::new(p(0, 0), p(9, 0), p(0, 4));
        assert!(tri.check_bounds(10, 5).is_ok());
        assert_eq!(
            tri.check_bounds(9, 5),
            Err(RasterError::OutOfBoundsWrite { vertex: p(9, 0), width: 9, height: 5 })
        );
        let negative = Triangle2D::new(p(1, 1), p(-1, 2), p(3, 3));
        assert!(negative.check_bounds(10, 10).is_err());
    }
}
