//! Scanline rasterization of outlined and filled triangles into a one byte per
//! pixel buffer, with text, PPM and PNG output.
//!
//! Drawing goes through three steps:
//!   vertices -> `triangle::order_by_y`
//!   ordered  -> `geometry::scan_convert` -> upper and lower `Band`s
//!   bands    -> `raster::outline_row` / `raster::fill_row` per `Span`

pub mod batch;
pub mod config;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod point2d;
pub mod raster;
pub mod rectangle;
pub mod scene;
pub mod screen;
pub mod triangle;

pub use batch::{DrawCommand, render_parallel, render_sequential};
pub use config::RenderConfig;
pub use encode::{OutputFormat, decode_txt, encode_ppm, encode_txt, to_rgb_image, write_file};
pub use error::RasterError;
pub use geometry::{Band, Edge, Span, round_half_up, scan_convert};
pub use point2d::Point2D;
pub use raster::{DrawMode, RasterTarget, draw_triangle, draw_triangle_fill, draw_triangle_outline};
pub use scene::Scene;
pub use screen::{RasterBand, RasterBuffer};
pub use triangle::{Triangle2D, order_by_y};
