use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use knot_saver_core::{
    AppConfig, Command, CommandBuffer, FrameSnapshot, Point2D, Recorder, RecordingSettings,
    Session,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

mod svg_frame;

fn main() -> knot_saver_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { run, every, output } => {
            run_simulate(&run, every, output.as_deref())
        }
        Commands::Snapshot {
            run,
            overlay,
            output,
        } => run_snapshot(&run, overlay, &output),
    }
}

fn run_simulate(
    run: &RunArgs,
    every: u64,
    output: Option<&Path>,
) -> knot_saver_core::Result<()> {
    let mut session = build_session(run)?;
    let frames = record_ticks(&mut session, run.ticks, every);
    tracing::info!(frames = frames.len(), "simulation finished");

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(file, &frames)?;
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &frames)?;
            println!();
        }
    }
    Ok(())
}

/// Runs `ticks` physics steps, capturing a snapshot every `every` ticks
/// including the initial and final state when they fall on the interval.
fn record_ticks(session: &mut Session, ticks: u64, every: u64) -> Vec<FrameSnapshot> {
    let mut recorder = Recorder::new(RecordingSettings {
        every_n_ticks: every,
        max_frames: None,
    });
    recorder.start();

    for tick in 0..=ticks {
        recorder.capture(tick, session);
        if tick == ticks {
            break;
        }
        session.apply(Command::Tick);
    }

    recorder.into_frames()
}

fn run_snapshot(run: &RunArgs, overlay: bool, output: &Path) -> knot_saver_core::Result<()> {
    let mut session = build_session(run)?;
    for _ in 0..run.ticks {
        session.apply(Command::Tick);
    }
    if overlay {
        session.apply(Command::ToggleHelp);
    }

    let mut frame = CommandBuffer::new();
    session.draw(&mut frame);

    let entries = session.help_entries();
    let overlay = session.is_help_visible().then_some(entries.as_slice());
    let document = svg_frame::render(session.config().viewport, frame.commands(), overlay);
    svg::save(output, &document)?;

    tracing::info!(?output, commands = frame.len(), "snapshot written");
    Ok(())
}

/// Loads configuration, applies CLI overrides and scatters the initial
/// control points.
fn build_session(run: &RunArgs) -> knot_saver_core::Result<Session> {
    let mut config = match &run.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(resolution) = run.resolution {
        config.knot.resolution = resolution;
    }
    config.validate()?;

    let mut rng = match run.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let viewport = config.viewport;
    let max_speed = config.simulation.max_speed;
    let mut session = Session::new(config);
    for _ in 0..run.points {
        let position = Point2D::new(
            rng.gen::<f64>() * viewport.width,
            rng.gen::<f64>() * viewport.height,
        );
        let velocity = Point2D::new(rng.gen::<f64>() * max_speed, rng.gen::<f64>() * max_speed);
        session.apply(Command::AddPoint { position, velocity });
    }
    if session.is_paused() {
        session.apply(Command::TogglePause);
    }

    tracing::info!(
        points = run.points,
        resolution = session.engine().resolution(),
        "session ready"
    );
    Ok(session)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Bouncing knot screen saver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the animation headless and dump periodic frame snapshots as JSON.
    Simulate {
        #[command(flatten)]
        run: RunArgs,
        /// Capture a snapshot every N ticks.
        #[arg(long, default_value_t = 10)]
        every: u64,
        /// Write the JSON here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the animation and render the final frame to an SVG file.
    Snapshot {
        #[command(flatten)]
        run: RunArgs,
        /// Draw the help overlay on top of the frame.
        #[arg(long)]
        overlay: bool,
        /// Destination SVG file.
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Optional JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of randomly placed control points.
    #[arg(short, long, default_value_t = 5)]
    points: usize,
    /// Number of physics ticks to run.
    #[arg(short, long, default_value_t = 120)]
    ticks: u64,
    /// Seed for point placement and velocities.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Samples per control point, overriding the configuration.
    #[arg(short, long)]
    resolution: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(points: usize, ticks: u64) -> RunArgs {
        RunArgs {
            config: None,
            points,
            ticks,
            seed: Some(7),
            resolution: Some(4),
        }
    }

    #[test]
    fn seeded_sessions_are_reproducible_and_running() {
        let a = build_session(&run_args(5, 0)).unwrap();
        let b = build_session(&run_args(5, 0)).unwrap();

        assert!(!a.is_paused());
        assert_eq!(a.control_points(), b.control_points());
        assert_eq!(a.curve_points().len(), 5 * 4);
    }

    #[test]
    fn records_every_nth_tick_and_moves_points() {
        let mut session = build_session(&run_args(3, 0)).unwrap();
        let frames = record_ticks(&mut session, 20, 10);

        let ticks: Vec<_> = frames.iter().map(|f| f.tick).collect();
        assert_eq!(ticks, vec![0, 10, 20]);
        assert!(frames.iter().all(|f| f.curve_points.len() == 3 * 4));
        assert_eq!(frames[2].control_points, session.control_points());
    }
}
