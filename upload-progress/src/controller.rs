//! Animation state of a mounted progress ring.
//!
//! [`ProgressRingController`] is the single writer of the ring's animation
//! state. Each run animates from the current value to
//! `cumulative + percentage`; the running total only grows from inside the
//! settlement path, after a pass completes. A new `percentage` supersedes an
//! unsettled run without reporting it.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::{
    CallbackWith, ProgressRingArgs, RingFrame, RingGeometry,
    animation::{Repeat, TimingAnimation},
};

/// One settled animation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Percentage that pass added, the value `on_finish` receives.
    pub percentage: f64,
    /// Running total after the pass was added.
    pub cumulative: f64,
    on_finish: Option<CallbackWith<f64>>,
}

impl Settlement {
    /// Invokes the completion handler that was active for this pass.
    pub fn notify(&self) {
        if let Some(on_finish) = &self.on_finish {
            on_finish.call(self.percentage);
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveRun {
    timing: TimingAnimation,
    percentage: f64,
}

/// Controller for one mounted progress ring.
///
/// The controller does not own a clock. Call [`tick`](Self::tick) once per
/// frame, or hand it to a [`FrameDriver`](crate::FrameDriver).
#[derive(Debug)]
pub struct ProgressRingController {
    args: ProgressRingArgs,
    geometry: RingGeometry,
    animated_value: f64,
    cumulative_percentage: f64,
    pending_target: f64,
    run: Option<ActiveRun>,
}

impl ProgressRingController {
    /// Mounts a ring and starts its first run now.
    pub fn new(args: ProgressRingArgs) -> Self {
        Self::mount_at(args, Instant::now())
    }

    /// Mounts a ring and starts its first run at `now`.
    pub fn mount_at(args: ProgressRingArgs, now: Instant) -> Self {
        warn_degenerate(&args);
        let mut controller = Self {
            geometry: RingGeometry::new(args.radius, args.stroke_width),
            pending_target: args.percentage,
            args,
            animated_value: 0.0,
            cumulative_percentage: 0.0,
            run: None,
        };
        controller.start_run(now);
        controller
    }

    /// Applies new args as of now. See [`update_at`](Self::update_at).
    pub fn update(&mut self, args: ProgressRingArgs) {
        self.update_at(args, Instant::now());
    }

    /// Applies new args at `now`.
    ///
    /// A change to `percentage`, `duration`, `looping` or the `on_finish`
    /// handle starts a new run. Any other change only affects the next frame.
    pub fn update_at(&mut self, args: ProgressRingArgs, now: Instant) {
        let restart = self.args.restarts_run(&args);
        if args.radius != self.args.radius || args.stroke_width != self.args.stroke_width {
            self.geometry = RingGeometry::new(args.radius, args.stroke_width);
        }
        if args.max != self.args.max {
            warn_degenerate(&args);
        }
        self.pending_target = args.percentage;
        self.args = args;
        if restart {
            self.start_run(now);
        }
    }

    fn start_run(&mut self, now: Instant) {
        if let Some(previous) = self.run.take() {
            debug!(
                from = previous.timing.from(),
                to = previous.timing.to(),
                value = self.animated_value,
                "superseding unsettled progress run"
            );
        }
        let target = self.cumulative_percentage + self.pending_target;
        let repeat = if self.args.looping {
            Repeat::Infinite
        } else {
            Repeat::Once
        };
        debug!(
            from = self.animated_value,
            target,
            duration_ms = self.args.duration.as_millis() as u64,
            looping = self.args.looping,
            "starting progress run"
        );
        self.run = Some(ActiveRun {
            timing: TimingAnimation::new(
                self.animated_value,
                target,
                self.args.duration,
                repeat,
                now,
            ),
            percentage: self.pending_target,
        });
    }

    /// Advances the animation to `now` without invoking `on_finish`.
    ///
    /// At most one pass settles per call. The running total already includes
    /// a returned settlement; the caller must [`notify`](Settlement::notify)
    /// it.
    pub fn advance(&mut self, now: Instant) -> Option<Settlement> {
        let run = self.run.as_mut()?;
        let sample = run.timing.advance(now);
        let percentage = run.percentage;
        self.animated_value = sample.value;
        trace!(value = sample.value, "progress frame");

        if sample.finished {
            self.run = None;
        }
        if !sample.settled {
            return None;
        }
        self.cumulative_percentage += percentage;
        debug!(
            percentage,
            cumulative = self.cumulative_percentage,
            "progress pass settled"
        );
        Some(Settlement {
            percentage,
            cumulative: self.cumulative_percentage,
            on_finish: self.args.on_finish.clone(),
        })
    }

    /// Advances the animation to `now` and invokes `on_finish` if a pass
    /// settled.
    ///
    /// The handler runs with the controller borrowed; use
    /// [`advance`](Self::advance) if it needs to reach back into the ring.
    pub fn tick(&mut self, now: Instant) -> Option<Settlement> {
        let settlement = self.advance(now);
        if let Some(settlement) = &settlement {
            settlement.notify();
        }
        settlement
    }

    /// Current value driving the fill.
    pub fn animated_value(&self) -> f64 {
        self.animated_value
    }

    /// Sum of every settled pass.
    pub fn cumulative_percentage(&self) -> f64 {
        self.cumulative_percentage
    }

    /// Percentage the current or next run adds.
    pub fn pending_target(&self) -> f64 {
        self.pending_target
    }

    /// Value the active run is heading to, if any.
    pub fn run_target(&self) -> Option<f64> {
        self.run.as_ref().map(|run| run.timing.to())
    }

    /// Whether a run is in flight.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Dash offset for the current value.
    pub fn stroke_dash_offset(&self) -> f64 {
        self.geometry
            .stroke_dash_offset(self.animated_value, self.args.max)
    }

    /// Geometry of the ring.
    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Args of the latest render.
    pub fn args(&self) -> &ProgressRingArgs {
        &self.args
    }

    /// Draw commands for the current value.
    pub fn frame(&self) -> RingFrame {
        RingFrame::new(
            &self.geometry,
            self.animated_value,
            self.args.max,
            self.args.color_inner,
            self.args.color_outer,
        )
    }

    /// Drops the animation and resets all state, as when the ring leaves the
    /// tree.
    pub fn unmount(&mut self) {
        debug!(
            cumulative = self.cumulative_percentage,
            "unmounting progress ring"
        );
        self.run = None;
        self.animated_value = 0.0;
        self.cumulative_percentage = 0.0;
        self.pending_target = self.args.percentage;
    }
}

fn warn_degenerate(args: &ProgressRingArgs) {
    if args.max == 0.0 {
        warn!("progress ring max is zero, stroke offset will not be finite");
    }
    if args.radius.0 <= 0.0 {
        warn!(radius = args.radius.0, "progress ring radius is not positive");
    }
}
