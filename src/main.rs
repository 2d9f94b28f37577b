// External crates
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

// STD library
use std::time::Instant;

// Internal imports
use trirast::config::Arguments;
use trirast::{RasterBuffer, render_parallel, render_sequential, write_file};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Arguments::parse().into_config();
    info!("{}x{} canvas, {} output to {}", config.width, config.height, config.format, config.output.display());

    let scene = config.load_scene()?;
    info!("{} triangle(s) to draw", scene.commands.len());

    let mut buffer = RasterBuffer::new(config.width, config.height);

    let draw_start = Instant::now();
    if config.parallel {
        let threads = config.threads.unwrap_or_else(num_cpus::get);
        info!("Drawing on {threads} thread(s)");
        // Scoped pool so --threads doesn't touch the global one
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to build thread pool")?;
        pool.install(|| render_parallel(&mut buffer, &scene.commands, Some(threads)))?;
    } else {
        render_sequential(&mut buffer, &scene.commands)?;
    }
    info!("Drew {} cell(s) in {:.2?}", buffer.marked_count(), draw_start.elapsed());

    let write_start = Instant::now();
    write_file(&buffer, &config.output, config.format)?;
    info!("Saved {} in {:.2?}", config.output.display(), write_start.elapsed());
    Ok(())
}
