use std::path::PathBuf;

use anyhow::Result;

use crate::encode::OutputFormat;
use crate::scene::{Scene, load_scene};

pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_HEIGHT: usize = 500;

/// Everything the driver needs to produce one picture.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub scene: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub parallel: bool,
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let format = OutputFormat::default();
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scene: None,
            format,
            output: default_output(format),
            parallel: false,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// The scene file if one was given, the reference scene otherwise.
    pub fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_scene(path),
            None => Ok(Scene::reference()),
        }
    }
}

fn default_output(format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("my_output.{}", format.extension()))
}

#[derive(clap::Parser, Debug)]
#[command(name = "trirast", version, about = "Rasterize outlined and filled triangles to an image file", long_about = None)]
pub struct Arguments {
    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Scene file with one `outline|fill x1 y1 x2 y2 x3 y3` per line
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    scene: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Ppm)]
    format: OutputFormat,

    /// Output path, `my_output.<format>` when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Split the canvas into strips rendered on a thread pool
    #[clap(long, action = clap::ArgAction::SetTrue)]
    parallel: bool,

    /// Worker threads for --parallel, defaults to the number of logical cores
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

impl Arguments {
    pub fn into_config(self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            scene: self.scene,
            format: self.format,
            output: self.output.unwrap_or_else(|| default_output(self.format)),
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}
