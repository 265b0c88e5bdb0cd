use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore as _, SeedableRng as _};
use rayon::prelude::*;

use bloom::{Flower, Geometry, GridSink, OpcClient, OpcDisplay, Tuning};

#[derive(Parser, Debug)]
#[command(name = "bloom", version)]
struct Cli {
    /// Log petal turnover and connection events.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate flowers on one or more OPC servers until interrupted.
    Run(RunArgs),
    /// Render a single frame as a PNG preview.
    Frame(FrameArgs),
    /// Black out every pixel on one or more OPC servers.
    Clear(ClearArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// OPC servers, `host` or `host:port`.
    #[arg(default_value = "localhost")]
    servers: Vec<String>,

    /// Tuning JSON overriding the built-in magic numbers.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Upper bound on the frame rate.
    #[arg(long, default_value_t = 100.0)]
    max_hz: f64,

    /// Seed for reproducible runs; omit for entropy.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Animation time to sample, in seconds after planting.
    #[arg(long, default_value_t = 1.0)]
    time: f64,

    /// Flower seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Tuning JSON overriding the built-in magic numbers.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pixels per grid cell in the flat preview.
    #[arg(long, default_value_t = 32)]
    scale: u32,
}

#[derive(Parser, Debug)]
struct ClearArgs {
    /// OPC servers, `host` or `host:port`.
    #[arg(default_value = "localhost")]
    servers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Clear(args) => cmd_clear(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One OPC server with its own flower and RNG stream.
struct Station {
    flower: Flower,
    display: OpcDisplay,
    rng: StdRng,
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    if args.max_hz <= 0.0 {
        anyhow::bail!("--max-hz must be positive");
    }
    let tuning = load_tuning(args.tuning.as_deref())?;
    let geometry = Geometry::flower();

    let mut seed_rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let start = Instant::now();
    let mut stations = Vec::with_capacity(args.servers.len());
    for server in &args.servers {
        let address = with_default_port(server);
        let mut rng = StdRng::seed_from_u64(seed_rng.next_u64());
        let flower = Flower::new(&mut rng, 0.0, geometry, tuning.clone())
            .with_context(|| format!("plant flower for '{address}'"))?;
        let display = OpcDisplay::new(OpcClient::new(address.as_str()));
        stations.push(Station {
            flower,
            display,
            rng,
        });
    }
    tracing::info!(stations = stations.len(), max_hz = args.max_hz, "animating");

    let frame_budget = Duration::from_secs_f64(1.0 / args.max_hz);
    loop {
        let frame_start = Instant::now();
        let now = start.elapsed().as_secs_f64();
        stations.par_iter_mut().for_each(|station| {
            station.flower.render(now, &mut station.display);
            // A server that drops out costs its own frames, nothing more;
            // the client reconnects on the next blit.
            if let Err(err) = station.display.blit() {
                tracing::warn!(
                    address = station.display.address(),
                    error = %err,
                    "dropped frame"
                );
            }
            for event in station.flower.grow(&mut station.rng, now) {
                tracing::debug!(
                    address = station.display.address(),
                    event = ?event,
                    "petal replaced"
                );
            }
        });
        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let tuning = load_tuning(args.tuning.as_deref())?;
    let geometry = Geometry::flower();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let flower = Flower::new(&mut rng, 0.0, geometry, tuning)?;

    let mut sink = GridSink::new(geometry);
    flower.render(args.time, &mut sink);

    // Flat preview: one column per ring, one row per position.
    let scale = args.scale.max(1);
    let mut img = image::RgbImage::new(geometry.rings * scale, geometry.positions * scale);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if let Some(color) = sink.get(x / scale, y / scale) {
            *pixel = image::Rgb(color.rgb());
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_clear(args: ClearArgs) -> anyhow::Result<()> {
    for server in &args.servers {
        let address = with_default_port(server);
        let mut client = OpcClient::new(address.as_str());
        bloom::clear(&mut client).with_context(|| format!("clear '{address}'"))?;
        eprintln!("cleared {address}");
    }
    Ok(())
}

fn load_tuning(path: Option<&Path>) -> anyhow::Result<Tuning> {
    match path {
        Some(path) => {
            Tuning::from_path(path).with_context(|| format!("load tuning '{}'", path.display()))
        }
        None => Ok(Tuning::default()),
    }
}

/// Append the conventional OPC port to server names that lack one.
fn with_default_port(server: &str) -> String {
    if server.contains(':') {
        server.to_string()
    } else {
        format!("{server}:7890")
    }
}
