mod clock;
mod demos;
mod error;
mod presets;
mod record;
mod script;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use plotter::color::ColorSpec;
use plotter::config::{EngineConfig, ScreenConfig};
use plotter::consts::DEFAULT_FRAME_RATE;
use plotter::input::InputSnapshot;
use plotter::render::RecordingBackend;
use plotter::screen::{FrameStatus, Screen};

use crate::clock::FrameClock;
use crate::demos::{Attractor, Demo, Wave};
use crate::error::CliError;
use crate::record::{FrameRecord, write_record};
use crate::script::ReplayScript;

#[derive(Parser, Debug)]
#[command(name = "pgplot", about = "Headless driver for the interactive plotting surface")]
struct Cli {
    /// Frame-rate cap, applied with --realtime.
    #[arg(long, env = "PLOT_FPS", default_value_t = DEFAULT_FRAME_RATE)]
    fps: u32,

    /// Pace frames at --fps instead of emitting them as fast as possible.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Zoom step per wheel event; overrides PLOT_ZOOM_FACTOR.
    #[arg(long)]
    zoom_factor: Option<f64>,

    /// Stroke color; overrides PLOT_STROKE_COLOR.
    #[arg(long)]
    stroke_color: Option<ColorSpec>,

    /// Stroke width in pixels; overrides PLOT_STROKE_WIDTH.
    #[arg(long)]
    stroke_width: Option<u32>,

    /// Background color; overrides PLOT_BACKGROUND.
    #[arg(long)]
    background: Option<ColorSpec>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON input script and print each frame's draw commands.
    Replay { script: PathBuf },
    /// Animate a travelling sine wave.
    Wave {
        #[arg(long, default_value_t = 300)]
        frames: u64,
    },
    /// Animate an attractor preset (1 through 13).
    Attractor {
        #[arg(long, default_value_t = 10)]
        preset: u32,
        #[arg(long, default_value_t = 1800)]
        frames: u64,
    },
}

#[derive(Debug)]
struct RunContext {
    screen: ScreenConfig,
    engine: EngineConfig,
    fps: u32,
    realtime: bool,
}

impl RunContext {
    fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut engine = EngineConfig::from_env()?;
        if let Some(zoom_factor) = cli.zoom_factor {
            engine.zoom_factor = zoom_factor;
        }
        if let Some(color) = &cli.stroke_color {
            engine.stroke_color = color.clone();
        }
        if let Some(width) = cli.stroke_width {
            engine.stroke_width = width;
        }
        let mut screen = ScreenConfig::from_env()?;
        if let Some(background) = &cli.background {
            screen.background = background.clone();
        }
        Ok(Self { screen, engine, fps: cli.fps, realtime: cli.realtime })
    }

    fn clock(&self) -> Option<FrameClock> {
        self.realtime.then(|| FrameClock::new(self.fps))
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let ctx = RunContext::from_cli(&cli)?;

    match cli.command {
        Command::Replay { script } => run_replay(&ctx, &script),
        Command::Wave { frames } => run_demo(&ctx, Wave::new(ctx.fps), frames),
        Command::Attractor { preset, frames } => {
            let demo = Attractor::new(presets::preset(preset)?, frames)?;
            run_demo(&ctx, demo, frames)
        }
    }
}

fn run_replay(ctx: &RunContext, path: &Path) -> Result<(), CliError> {
    let script = ReplayScript::load(path)?;
    tracing::info!(path = %path.display(), ticks = script.ticks.len(), "replaying script");
    let mut clock = ctx.clock();
    let mut out = io::stdout().lock();
    script::replay(&script, ctx.screen.clone(), ctx.engine.clone(), |record| {
        write_record(&mut out, &record)?;
        if let Some(clock) = clock.as_mut() {
            clock.tick();
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}

fn run_demo(ctx: &RunContext, mut demo: impl Demo, frames: u64) -> Result<(), CliError> {
    let config = demo.screen_config(ctx.screen.clone());
    let mut screen = Screen::new(config, ctx.engine.clone(), RecordingBackend::new())?;
    let mut clock = ctx.clock();
    let mut out = io::stdout().lock();
    let input = InputSnapshot::default();

    tracing::info!(frames, realtime = ctx.realtime, fps = ctx.fps, "demo started");
    for frame in 0..frames {
        demo.draw(&mut screen)?;
        let status = screen.update(&input)?;
        write_record(&mut out, &FrameRecord::new(frame, status, screen.backend_mut().take_frames()))?;
        if let Some(clock) = clock.as_mut() {
            clock.tick();
        }
        if status == FrameStatus::Quit {
            break;
        }
    }
    out.flush()?;
    Ok(())
}
