//! trifill: renders a scene file to a PNG.

use std::path::PathBuf;

use clap::Parser;
use trifill::{ChannelMode, RasterizerType, Scene};

#[derive(Parser, Debug)]
#[command(name = "trifill", version, about = "Rasterize Gouraud-shaded triangles from a TOML scene")]
struct Args {
    /// Scene file to render
    scene: PathBuf,

    /// Where to write the rendered image
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Overrides the scene's rasterizer (scanline, edge_function)
    #[arg(long)]
    rasterizer: Option<RasterizerType>,

    /// Overrides the scene's channel mode (wrap, saturate)
    #[arg(long)]
    channel_mode: Option<ChannelMode>,

    /// Overrides the scene's light factor
    #[arg(long)]
    light_factor: Option<f64>,

    /// Also show the scene in a window
    #[cfg(feature = "sdl")]
    #[arg(long)]
    window: bool,

    /// Window pixel scale
    #[cfg(feature = "sdl")]
    #[arg(long, default_value_t = 4)]
    scale: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut scene = Scene::load(&args.scene)?;
    if let Some(rasterizer) = args.rasterizer {
        scene.raster.rasterizer = rasterizer;
    }
    if let Some(channel_mode) = args.channel_mode {
        scene.raster.channel_mode = channel_mode;
    }
    if let Some(light_factor) = args.light_factor {
        scene.light_factor = light_factor;
    }

    let stats = scene.render_png(&args.output)?;
    log::info!(
        "Wrote {} ({} faces drawn, {} skipped, {} pixels, {} rasterizer)",
        args.output.display(),
        stats.drawn,
        stats.skipped,
        stats.pixels,
        scene.raster.rasterizer
    );

    #[cfg(feature = "sdl")]
    if args.window {
        let mut window =
            trifill::window::Window::new("trifill", scene.width, scene.height, args.scale)?;
        window.run(&scene)?;
    }

    Ok(())
}
