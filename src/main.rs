//! Renders a bitmap text file as a dot reveal, frame by frame.

use {
  std::{fs, path::PathBuf, sync::Arc, time::{Duration, Instant}},
  anyhow::{anyhow, Context, Result},
  clap::{Parser, ValueEnum},
  euclid::Size2D,
  dot_reveal::{
    drawing::{Canvas, Paint},
    options::{RenderOptions, RevealPolicy},
    render::{render_dots, Stage},
    surface,
    timer::ManualTimer
  }
};

#[derive(Parser, Debug)]
#[command(name = "dot-reveal", version, about = "Draw a 0/1 bitmap as dots appearing in random order")]
struct Args {
  /// Text file, one row per line, `1` marks a dot
  bitmap: PathBuf,
  #[arg(long, default_value_t = 1024)]
  width: u32,
  #[arg(long, default_value_t = 768)]
  height: u32,
  /// Gap between the edges of two neighbouring dots
  #[arg(long, default_value_t = 1.0)]
  spacing: f32,
  /// `#rrggbb`, `#rgb`, `#rrggbbaa` or a color name
  #[arg(long, default_value = "red")]
  color: String,
  #[arg(long, value_enum, default_value_t = Policy::Queue)]
  policy: Policy,
  /// Delay window of the `delay` policy, seconds
  #[arg(long, default_value_t = 2.0)]
  window: f32,
  /// Pause between two draws of the `queue` policy, milliseconds
  #[arg(long, default_value_t = 1)]
  tick_ms: u64,
  #[arg(long, default_value_t = 30)]
  fps: u32,
  /// Write every frame as a numbered png into this directory
  #[arg(long)]
  frames: Option<PathBuf>,
  #[arg(short, long, default_value = "out.png")]
  output: PathBuf,
  /// Fixes the reveal order
  #[arg(long)]
  seed: Option<u64>,
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Policy {
  /// Shuffled queue, one dot per tick
  Queue,
  /// Independent random delay per dot
  Delay,
}

fn main() -> Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt()
    .with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
    .init();

  let text = fs::read_to_string(&args.bitmap)
    .with_context(|| format!("unable to read {}", args.bitmap.display()))?;
  let rows = text.lines()
    .map(|line| line.trim_end_matches('\r'))
    .collect::<Vec<_>>();
  let policy = match args.policy {
    Policy::Queue => RevealPolicy::ShuffledQueue { tick: Duration::from_millis(args.tick_ms) },
    Policy::Delay => RevealPolicy::random_delay(args.window)?,
  };

  let canvas = surface::shared(Canvas::new(args.width, args.height));
  let timer = ManualTimer::new();
  let mut stage = Stage::new(Size2D::new(args.width as f32, args.height as f32), timer.clone());
  stage.insert("canvas", canvas.clone());

  let t0 = Instant::now();
  let reveal = render_dots(&stage, &rows, "canvas", RenderOptions {
    fill_style: args.color.parse::<Paint>()?,
    spacing: args.spacing,
    policy,
    seed: args.seed,
    ..Default::default()
  })?;

  if let Some(dir) = &args.frames {
    fs::create_dir_all(dir)
      .with_context(|| format!("unable to create {}", dir.display()))?;
  }
  let frame = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
  let mut frames = 0;
  while !reveal.is_finished() {
    timer.advance(frame);
    if let Some(dir) = &args.frames {
      canvas.lock()
        .map_err(|_| anyhow!("canvas lock is poisoned"))?
        .image()
        .save(dir.join(format!("{:05}.png", frames)))?;
    }
    frames += 1;
  }

  // every draw has run, the stage holds the only other handle
  drop(stage);
  Arc::try_unwrap(canvas)
    .map_err(|_| anyhow!("canvas is still in use"))?
    .into_inner()
    .map_err(|_| anyhow!("canvas lock is poisoned"))?
    .into_image()
    .save(&args.output)
    .with_context(|| format!("unable to write {}", args.output.display()))?;
  tracing::info!(
    dots = reveal.drawn(),
    radius = reveal.radius(),
    frames,
    elapsed_ms = t0.elapsed().as_millis() as u64,
    "{} written", args.output.display()
  );
  Ok(())
}
