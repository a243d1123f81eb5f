//! Caller-supplied configuration of a progress ring.

use std::time::Duration;

use derive_setters::Setters;

use crate::{CallbackWith, Color, Dp, Palette};

/// Arguments for a progress ring.
///
/// Values are passed through unvalidated. Negative sizes, a zero `max` or a
/// zero `duration` are the caller's responsibility.
///
/// ```
/// use std::time::Duration;
/// use upload_progress::ProgressRingArgs;
///
/// let args = ProgressRingArgs::default()
///     .percentage(25.0)
///     .duration(Duration::from_millis(500))
///     .on_finish(|delta| println!("settled after adding {delta}"));
/// assert_eq!(args.max, 100.0);
/// ```
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct ProgressRingArgs {
    /// Amount added to the running total by each animation run.
    pub percentage: f64,
    /// Radius of the background disc. The widget is `2 * radius` square.
    pub radius: Dp,
    /// Declared stroke width. Pads the view box; the arc itself is stroked
    /// `radius` wide.
    pub stroke_width: Dp,
    /// Length of one animation pass.
    pub duration: Duration,
    /// Color of the animated arc.
    pub color_inner: Color,
    /// Color of the background disc.
    pub color_outer: Color,
    /// Value that represents a full ring.
    pub max: f64,
    /// Repeat each run forever.
    pub looping: bool,
    /// Invoked with `percentage` each time a pass settles.
    #[setters(skip)]
    pub on_finish: Option<CallbackWith<f64>>,
}

impl ProgressRingArgs {
    /// Sets the completion handler.
    pub fn on_finish<F>(mut self, on_finish: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_finish = Some(CallbackWith::new(on_finish));
        self
    }

    /// Sets the completion handler using a shared callback.
    pub fn on_finish_shared(mut self, on_finish: impl Into<CallbackWith<f64>>) -> Self {
        self.on_finish = Some(on_finish.into());
        self
    }

    /// Whether moving from `self` to `next` must restart the animation.
    ///
    /// Only the inputs of a run count. Colors, sizes and `max` change how a
    /// frame is drawn, not where the animation is heading.
    pub(crate) fn restarts_run(&self, next: &ProgressRingArgs) -> bool {
        self.percentage != next.percentage
            || self.duration != next.duration
            || self.looping != next.looping
            || self.on_finish != next.on_finish
    }
}

impl Default for ProgressRingArgs {
    fn default() -> Self {
        Self {
            percentage: 10.0,
            radius: Dp(40.0),
            stroke_width: Dp(10.0),
            duration: Duration::from_millis(300),
            color_inner: Palette::GREEN_600,
            color_outer: Palette::GREEN_400,
            max: 100.0,
            looping: false,
            on_finish: None,
        }
    }
}
