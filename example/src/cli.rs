use std::{fs, path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use upload_progress::{Color, Dp, ProgressRingArgs, RingConfig};

/// Drive an upload progress ring and print its final frame as SVG.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// TOML file with ring settings. Flags override it.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Percentages to add, one run each, in order.
    #[arg(long, value_delimiter = ',', default_value = "25,10,30")]
    pub chunks: Vec<f64>,

    /// Ring radius in dp.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Pass length in milliseconds.
    #[arg(long)]
    pub duration_ms: Option<u64>,

    /// Value that fills the ring.
    #[arg(long)]
    pub max: Option<f64>,

    /// Arc color as hex.
    #[arg(long)]
    pub color_inner: Option<Color>,

    /// Background color as hex.
    #[arg(long)]
    pub color_outer: Option<Color>,

    /// Repeat the first chunk forever and stop after `--passes`.
    #[arg(long = "loop")]
    pub looping: bool,

    /// Passes to wait for in loop mode.
    #[arg(long, default_value_t = 3)]
    pub passes: usize,

    /// Frame driver tick interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub frame_interval_ms: u64,

    /// Write the final frame here instead of stdout.
    #[arg(long)]
    pub svg_out: Option<PathBuf>,
}

impl Cli {
    /// Resolves the ring args from the config file and flags.
    pub fn ring_args(&self) -> anyhow::Result<ProgressRingArgs> {
        let config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str::<RingConfig>(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => RingConfig::default(),
        };
        let mut args = config.into_args()?;

        if let Some(radius) = self.radius {
            args.radius = Dp(radius);
        }
        if let Some(duration_ms) = self.duration_ms {
            args.duration = Duration::from_millis(duration_ms);
        }
        if let Some(max) = self.max {
            args.max = max;
        }
        if let Some(color) = self.color_inner {
            args.color_inner = color;
        }
        if let Some(color) = self.color_outer {
            args.color_outer = color;
        }
        if self.looping {
            args.looping = true;
        }
        Ok(args)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}
