use clap::Parser;
use quadlight_common::{FilterMode, Size, WrapMode};
use quadlight_runtime::options::{
    DemoOptions, TextureSource, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Render a rotating, lit, textured quad with Direct3D 11.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Width of the window's client area.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Height of the window's client area.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Multisample count of the back buffer. One of 1, 2, 4 or 8.
    #[arg(long, default_value_t = 4)]
    samples: u32,
    /// The image to texture the quad with.
    ///
    /// A checkerboard is generated if no image is given.
    #[arg(short, long)]
    texture: Option<PathBuf>,
    /// Load vertex.hlsl, geometry.hlsl and fragment.hlsl from this directory
    /// instead of using the built-in shaders.
    #[arg(short, long)]
    shader_dir: Option<PathBuf>,
    /// Wait for vertical blank when presenting.
    #[arg(long)]
    vsync: bool,
    /// The window title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Texture filtering.
    #[arg(value_enum, long, default_value = "linear")]
    filter: Filter,
    /// Texture addressing outside of [0, 1].
    #[arg(value_enum, long, default_value = "repeat")]
    wrap: Wrap,
    /// Enable the Direct3D debug layer even in release builds.
    #[arg(long)]
    debug_layer: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Filter {
    #[clap(name = "linear")]
    Linear,
    #[clap(name = "nearest")]
    Nearest,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Wrap {
    #[clap(name = "repeat")]
    Repeat,
    #[clap(name = "mirrored_repeat")]
    MirroredRepeat,
    #[clap(name = "clamp_to_edge")]
    ClampToEdge,
    #[clap(name = "clamp_to_border")]
    ClampToBorder,
}

impl From<Filter> for FilterMode {
    fn from(value: Filter) -> Self {
        match value {
            Filter::Linear => FilterMode::Linear,
            Filter::Nearest => FilterMode::Nearest,
        }
    }
}

impl From<Wrap> for WrapMode {
    fn from(value: Wrap) -> Self {
        match value {
            Wrap::Repeat => WrapMode::Repeat,
            Wrap::MirroredRepeat => WrapMode::MirroredRepeat,
            Wrap::ClampToEdge => WrapMode::ClampToEdge,
            Wrap::ClampToBorder => WrapMode::ClampToBorder,
        }
    }
}

impl Args {
    fn into_options(self) -> DemoOptions {
        let defaults = DemoOptions::default();
        DemoOptions {
            title: self.title,
            size: Size::new(self.width, self.height),
            sample_count: self.samples,
            vsync: self.vsync,
            texture: self
                .texture
                .map_or(TextureSource::Checkerboard, TextureSource::File),
            filter: self.filter.into(),
            wrap_mode: self.wrap.into(),
            shader_dir: self.shader_dir,
            debug_layer: self.debug_layer || defaults.debug_layer,
            ..defaults
        }
    }
}

#[cfg(windows)]
fn run(options: DemoOptions) -> anyhow::Result<()> {
    quadlight_runtime_d3d11::run(options)?;
    Ok(())
}

#[cfg(not(windows))]
fn run(_options: DemoOptions) -> anyhow::Result<()> {
    Err(anyhow::anyhow!("quadlight requires Direct3D 11, which is only available on Windows"))
}

/// Log a failure once and turn it into the process exit status.
fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Args::parse().into_options();
    log::debug!("{options:?}");

    report(run(options))
}
