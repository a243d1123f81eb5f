mod cli;

use std::{
    fs,
    sync::{Arc, mpsc},
    time::Duration,
};

use anyhow::{Context as _, bail};
use clap::Parser;
use parking_lot::Mutex;
use tracing::{info, warn};
use upload_progress::{FrameDriver, ProgressRingController};

use crate::cli::Cli;

/// Longest wait for a single settlement before giving up.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,upload_progress=info,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(&first) = cli.chunks.first() else {
        bail!("--chunks needs at least one value");
    };

    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    let args = cli
        .ring_args()?
        .percentage(first)
        .on_finish(move |delta| {
            let _ = tx.lock().send(delta);
        });

    let controller = Arc::new(Mutex::new(ProgressRingController::new(args.clone())));
    let mut driver = FrameDriver::spawn(Arc::clone(&controller), cli.frame_interval())
        .context("failed to start frame driver")?;

    if args.looping {
        for pass in 1..=cli.passes {
            let delta = rx
                .recv_timeout(SETTLE_TIMEOUT)
                .context("ring never settled")?;
            info!(pass, delta, "loop pass settled");
        }
    } else {
        let mut previous = None;
        for &chunk in &cli.chunks {
            if previous == Some(chunk) {
                warn!(chunk, "repeated chunk does not start a new run, skipping");
                continue;
            }
            if previous.is_some() {
                controller.lock().update(args.clone().percentage(chunk));
            }
            previous = Some(chunk);

            let delta = rx
                .recv_timeout(SETTLE_TIMEOUT)
                .context("ring never settled")?;
            let total = controller.lock().cumulative_percentage();
            info!(delta, total, "chunk uploaded");
        }
    }

    driver.stop();
    let frame = controller.lock().frame();
    if let Some(arc) = frame.arc_command(1.0) {
        info!(sweep = arc.sweep_angle_degrees, "final arc");
    }
    if let Err(err) = frame.to_tree() {
        warn!(%err, "final frame does not parse as SVG");
    }
    let svg = frame.to_svg();
    match &cli.svg_out {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote final frame");
        }
        None => print!("{svg}"),
    }
    Ok(())
}
