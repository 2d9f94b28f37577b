extern crate trirast;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trirast::{
    DrawCommand, DrawMode, Point2D, RasterBuffer, RasterError, Triangle2D, decode_txt, draw_triangle,
    encode_txt, order_by_y, render_parallel, render_sequential, scan_convert,
};

const SIZE: i32 = 64;
const ROUNDS: usize = 500;

fn random_point(rng: &mut StdRng) -> Point2D {
    Point2D::new(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE))
}

fn random_triangle(rng: &mut StdRng) -> Triangle2D {
    loop {
        let tri = Triangle2D::new(random_point(rng), random_point(rng), random_point(rng));
        let [a, b, c] = tri.vertices();
        if !(a.y == b.y && b.y == c.y) {
            return tri;
        }
    }
}

fn canvas() -> RasterBuffer {
    RasterBuffer::new(SIZE as usize, SIZE as usize)
}

#[test]
fn ordering_is_a_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let (a, b, c) = (random_point(&mut rng), random_point(&mut rng), random_point(&mut rng));
        let (p1, p2, p3) = order_by_y(a, b, c);
        assert!(p1.y <= p2.y && p2.y <= p3.y);

        let mut input = vec![a, b, c];
        let mut output = vec![p1, p2, p3];
        input.sort_by_key(|p| (p.x, p.y));
        output.sort_by_key(|p| (p.x, p.y));
        assert_eq!(input, output);
    }
}

#[test]
fn span_edges_move_by_at_most_slope_plus_one() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let tri = random_triangle(&mut rng);
        for band in scan_convert(&tri).unwrap() {
            let spans: Vec<_> = band.spans().collect();
            for pair in spans.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                assert_eq!(next.y, prev.y + 1);
                let left_step = (next.left_x - prev.left_x).abs() as f32;
                let right_step = (next.right_x - prev.right_x).abs() as f32;
                assert!(left_step <= next.left_slope.abs() + 1.0, "{tri} left at row {}", next.y);
                assert!(right_step <= next.right_slope.abs() + 1.0, "{tri} right at row {}", next.y);
            }
        }
    }
}

#[test]
fn outline_stays_within_thickened_fill() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let tri = random_triangle(&mut rng);
        let mut outline = canvas();
        let mut fill = canvas();
        draw_triangle(&mut outline, DrawMode::Outline, &tri).unwrap();
        draw_triangle(&mut fill, DrawMode::Fill, &tri).unwrap();

        for band in scan_convert(&tri).unwrap() {
            for span in band.spans() {
                let y = span.y as usize;
                let reach = (span.left_slope.abs() as i32).max(span.right_slope.abs() as i32);
                let lo = span.left_x.min(span.right_x) - reach;
                let hi = span.left_x.max(span.right_x) + reach;
                for x in 0..SIZE {
                    if outline.is_marked(x as usize, y) && !fill.is_marked(x as usize, y) {
                        assert!(x >= lo && x <= hi, "{tri}: stray outline cell ({x}, {y})");
                    }
                }
            }
        }

        // Both modes touch the same rows.
        for y in 0..SIZE as usize {
            assert_eq!(outline.row(y).contains(&1), fill.row(y).contains(&1), "{tri} row {y}");
        }
    }
}

#[test]
fn redrawing_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let tri = random_triangle(&mut rng);
        let mode = if rng.gen_range(0..2) == 0 { DrawMode::Outline } else { DrawMode::Fill };
        let mut buf = canvas();
        draw_triangle(&mut buf, mode, &tri).unwrap();
        let once = buf.clone();
        draw_triangle(&mut buf, mode, &tri).unwrap();
        assert_eq!(buf, once, "{tri}");
        assert!(buf.cells().iter().all(|&c| c <= 1));
    }
}

#[test]
fn zero_height_triangles_write_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let y = rng.gen_range(0..SIZE);
        let tri = Triangle2D::new(
            Point2D::new(rng.gen_range(0..SIZE), y),
            Point2D::new(rng.gen_range(0..SIZE), y),
            Point2D::new(rng.gen_range(0..SIZE), y),
        );
        let mut buf = canvas();
        let err = draw_triangle(&mut buf, DrawMode::Fill, &tri).unwrap_err();
        assert_eq!(err, RasterError::DegenerateTriangleEdge { triangle: tri });
        assert_eq!(buf.marked_count(), 0);
    }
}

#[test]
fn parallel_batches_match_sequential() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..50 {
        let commands: Vec<DrawCommand> = (0..rng.gen_range(1..12))
            .map(|_| {
                let tri = random_triangle(&mut rng);
                if rng.gen_range(0..2) == 0 { DrawCommand::outline(tri) } else { DrawCommand::fill(tri) }
            })
            .collect();
        let mut sequential = canvas();
        render_sequential(&mut sequential, &commands).unwrap();
        let mut parallel = canvas();
        render_parallel(&mut parallel, &commands, Some(rng.gen_range(1..9))).unwrap();
        assert_eq!(parallel, sequential);
    }
}

#[test]
fn text_encoding_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut buf = canvas();
        for _ in 0..4 {
            draw_triangle(&mut buf, DrawMode::Fill, &random_triangle(&mut rng)).unwrap();
        }
        let mut text = Vec::new();
        encode_txt(&buf, &mut text).unwrap();
        assert_eq!(decode_txt(text.as_slice()).unwrap(), buf);
    }
}
