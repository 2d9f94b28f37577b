use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use crate::batch::DrawCommand;
use crate::point2d::Point2D;
use crate::raster::DrawMode;
use crate::triangle::Triangle2D;

/// Ordered list of triangles to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// The demo picture: an outlined triangle and, shifted 250 columns right,
    /// the same triangle filled. Vertices are given in the driver's order.
    pub fn reference() -> Self {
        let outline = Triangle2D::new(Point2D::new(20, 20), Point2D::new(50, 400), Point2D::new(200, 90));
        let fill = Triangle2D::new(Point2D::new(270, 20), Point2D::new(300, 400), Point2D::new(450, 90));
        Scene {
            commands: vec![DrawCommand::outline(outline), DrawCommand::fill(fill)],
        }
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_scene(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// One command per line: `outline|fill x1 y1 x2 y2 x3 y3`. `#` comments and
/// blank lines are skipped.
pub fn parse_scene(text: &str) -> Result<Scene> {
    let mut commands = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue
        }
        let command = parse_command(&tokens).with_context(|| format!("line {}", index + 1))?;
        commands.push(command);
    }

    Ok(Scene { commands })
}

fn parse_command(tokens: &[&str]) -> Result<DrawCommand> {
    let mode = match tokens[0] {
        "outline" => DrawMode::Outline,
        "fill" => DrawMode::Fill,
        other => bail!("unknown command {other:?}"),
    };
    if tokens.len() != 7 {
        bail!("expected 6 coordinates, found {}", tokens.len() - 1);
    }
    let mut coords = [0i32; 6];
    for (slot, token) in coords.iter_mut().zip(&tokens[1..]) {
        *slot = token
            .parse()
            .map_err(|err| anyhow!("bad coordinate {token:?}: {err}"))?;
    }
    let [x1, y1, x2, y2, x3, y3] = coords;
    Ok(DrawCommand {
        mode,
        triangle: Triangle2D::new(Point2D::new(x1, y1), Point2D::new(x2, y2), Point2D::new(x3, y3)),
    })
}
