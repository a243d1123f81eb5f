//! An animated circular progress ring for upload screens.
//!
//! The ring is a background disc with a thick dashed circle on top. Each
//! run animates the dash offset linearly from the current value to the
//! running total plus the new `percentage`, then reports the percentage it
//! added through `on_finish`.
//!
//! # Usage
//!
//! Mount a [`ProgressRingController`] with [`ProgressRingArgs`], tick it
//! every frame, and draw the [`RingFrame`] it produces.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use upload_progress::{ProgressRingArgs, ProgressRingController};
//!
//! let start = Instant::now();
//! let args = ProgressRingArgs::default().percentage(25.0);
//! let mut ring = ProgressRingController::mount_at(args.clone(), start);
//!
//! ring.tick(start + Duration::from_millis(300));
//! assert_eq!(ring.cumulative_percentage(), 25.0);
//!
//! // The next run is relative to the running total.
//! ring.update_at(args.percentage(10.0), start + Duration::from_millis(400));
//! assert_eq!(ring.run_target(), Some(35.0));
//!
//! let svg = ring.frame().to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! For hosts without a frame loop of their own, [`FrameDriver`] ticks a
//! shared controller from a background thread.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod args;
pub mod callback;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod dp;
pub mod driver;
pub mod geometry;
pub mod svg;

pub use crate::{
    animation::{Repeat, TimingAnimation, TimingSample},
    args::ProgressRingArgs,
    callback::CallbackWith,
    color::{Color, ColorParseError, Palette},
    command::{ProgressArcCommand, RingCommand, RingFrame},
    config::{ConfigError, RingConfig},
    controller::{ProgressRingController, Settlement},
    dp::Dp,
    driver::{DEFAULT_FRAME_INTERVAL, FrameDriver},
    geometry::RingGeometry,
    svg::RenderError,
};
