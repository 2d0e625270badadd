use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use clockface::{
    ClockConfig, CompositeConfig, Direction, FsImageLoader, OutputTargets, OverlayConfig, QuitFlag,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clockface", version, about = "Clock-face animation pipelines")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the analog clock animation.
    Clock(ClockArgs),
    /// Spin the clock animation in 3D in front of a background (MP4 requires `ffmpeg` on PATH).
    Overlay(OverlayArgs),
    /// Alpha-blend the clock animation onto the centre of a background.
    Composite(CompositeArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    #[value(name = "cw", alias = "clockwise")]
    Cw,
    #[value(name = "ccw", alias = "counter-clockwise")]
    Ccw,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Cw => Direction::Clockwise,
            DirectionArg::Ccw => Direction::CounterClockwise,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// MP4 output path.
    #[arg(long)]
    video: Option<PathBuf>,

    /// GIF output path.
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Skip the MP4 output.
    #[arg(long, default_value_t = false)]
    no_video: bool,

    /// Skip the GIF output.
    #[arg(long, default_value_t = false)]
    no_gif: bool,
}

impl OutputArgs {
    fn apply(&self, targets: &mut OutputTargets) {
        if let Some(p) = &self.video {
            targets.video = Some(p.clone());
        }
        if let Some(p) = &self.gif {
            targets.gif = Some(p.clone());
        }
        if self.no_video {
            targets.video = None;
        }
        if self.no_gif {
            targets.gif = None;
        }
    }
}

#[derive(Parser, Debug)]
struct ClockArgs {
    /// JSON config; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dial direction. Without `--config` this also picks the variant's speed and output names.
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    #[command(flatten)]
    outputs: OutputArgs,

    /// Write the first frame as PNG.
    #[arg(long)]
    preview: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// JSON config; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Clock animation (GIF or any container `ffmpeg` can read).
    #[arg(long)]
    clock: Option<PathBuf>,

    #[command(flatten)]
    outputs: OutputArgs,

    /// Cap on captured frames.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Render as fast as possible instead of pacing to the output frame rate.
    #[arg(long, default_value_t = false)]
    no_throttle: bool,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// JSON config; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Clock animation (GIF or any container `ffmpeg` can read).
    #[arg(long)]
    clock: Option<PathBuf>,

    #[command(flatten)]
    outputs: OutputArgs,

    /// Write the first composited frame as PNG.
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Clock(args) => cmd_clock(args),
        Command::Overlay(args) => cmd_overlay(args),
        Command::Composite(args) => cmd_composite(args),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_clock(args: ClockArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => {
            let mut cfg = ClockConfig::from_path(path)?;
            if let Some(d) = args.direction {
                cfg.direction = d.into();
            }
            cfg
        }
        None => {
            ClockConfig::for_direction(args.direction.map_or(Direction::Clockwise, Into::into))
        }
    };
    args.outputs.apply(&mut cfg.outputs);
    if args.preview.is_some() {
        cfg.preview = args.preview;
    }

    let frames = clockface::run_clock(&cfg)?;
    report(&cfg.outputs, cfg.preview.as_deref(), frames);
    Ok(())
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => OverlayConfig::from_path(path)?,
        None => OverlayConfig::default(),
    };
    if let Some(p) = args.background {
        cfg.background = p;
    }
    if let Some(p) = args.clock {
        cfg.clock = p;
    }
    if let Some(n) = args.max_frames {
        cfg.max_frames = n;
    }
    if args.no_throttle {
        cfg.throttle = false;
    }
    args.outputs.apply(&mut cfg.outputs);

    let quit = QuitFlag::new();
    spawn_quit_listener(quit.clone());

    let frames = clockface::run_overlay(&cfg, &FsImageLoader, &quit)?;
    report(&cfg.outputs, None, frames);
    Ok(())
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => CompositeConfig::from_path(path)?,
        None => CompositeConfig::default(),
    };
    if let Some(p) = args.background {
        cfg.background = p;
    }
    if let Some(p) = args.clock {
        cfg.clock = p;
    }
    args.outputs.apply(&mut cfg.outputs);
    if args.preview.is_some() {
        cfg.preview = args.preview;
    }

    let frames = clockface::run_composite(&cfg, &FsImageLoader)?;
    report(&cfg.outputs, cfg.preview.as_deref(), frames);
    Ok(())
}

fn report(outputs: &OutputTargets, preview: Option<&Path>, frames: usize) {
    for path in [outputs.video.as_deref(), outputs.gif.as_deref()]
        .into_iter()
        .flatten()
    {
        eprintln!("wrote {} ({frames} frames)", path.display());
    }
    if let Some(path) = preview {
        eprintln!("wrote {}", path.display());
    }
}

/// Raise `flag` on Ctrl-C or SIGTERM so the overlay loop can finish its current frame and still
/// encode what it captured.
fn spawn_quit_listener(flag: QuitFlag) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!(error = %e, "signal listener unavailable");
                return;
            }
        };
        rt.block_on(shutdown_signal());
        tracing::info!("stop requested");
        flag.request();
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = terminate_signal(tokio::signal::unix::signal(
        tokio::signal::unix::SignalKind::terminate(),
    ));
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Resolve on SIGTERM; park forever if the handler could not be installed.
#[cfg(unix)]
async fn terminate_signal(handler: std::io::Result<tokio::signal::unix::Signal>) {
    match handler {
        Ok(mut term) => {
            term.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}
