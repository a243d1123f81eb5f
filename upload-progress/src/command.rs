//! Draw commands describing one frame of a ring.
//!
//! A [`RingFrame`] is a renderer-agnostic snapshot: the view box, the group
//! rotation and the two circles in paint order. Hosts either walk the
//! commands themselves, turn the frame into SVG (see [`crate::svg`]), or ask
//! for a single [`ProgressArcCommand`] if they have an arc pipeline.

use smallvec::SmallVec;

use crate::{Color, Dp, RingGeometry};

/// One circle of the ring, in view box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RingCommand {
    /// Filled background disc without stroke.
    Disc {
        /// Center `(x, y)`.
        center: (f64, f64),
        /// Radius.
        radius: f64,
        /// Fill color.
        fill: Color,
    },
    /// Stroked circle whose visible share is controlled by a dash offset.
    DashedCircle {
        /// Center `(x, y)`.
        center: (f64, f64),
        /// Radius of the stroke's center line.
        radius: f64,
        /// Stroke color.
        stroke: Color,
        /// Stroke width.
        stroke_width: f64,
        /// Single dash length, equal to the circumference.
        dash_array: f64,
        /// Offset of the dash pattern. May be non-finite.
        dash_offset: f64,
    },
}

/// A complete frame of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFrame {
    /// Rendered size `(width, height)`.
    pub size: (f64, f64),
    /// View box `(min_x, min_y, width, height)`.
    pub view_box: (f64, f64, f64, f64),
    /// Rotation of the circle group, so the arc starts at 12 o'clock.
    pub rotation_degrees: f64,
    /// Pivot of the rotation.
    pub origin: (f64, f64),
    /// Circles in paint order.
    pub commands: SmallVec<[RingCommand; 2]>,
    /// Visible share of the arc, `1.0` for a full ring. Not clamped.
    pub filled_fraction: f64,
}

/// Group rotation applied to every ring.
const RING_ROTATION_DEGREES: f64 = -90.0;

impl RingFrame {
    /// Builds the frame for `animated_value` out of `max`.
    pub fn new(
        geometry: &RingGeometry,
        animated_value: f64,
        max: f64,
        color_inner: Color,
        color_outer: Color,
    ) -> Self {
        let center = geometry.center();
        let mut commands = SmallVec::new();
        commands.push(RingCommand::Disc {
            center,
            radius: geometry.radius(),
            fill: color_outer,
        });
        commands.push(RingCommand::DashedCircle {
            center,
            radius: geometry.arc_radius(),
            stroke: color_inner,
            stroke_width: geometry.arc_stroke_width(),
            dash_array: geometry.circumference(),
            dash_offset: geometry.stroke_dash_offset(animated_value, max),
        });
        Self {
            size: geometry.bounding_box(),
            view_box: geometry.view_box(),
            rotation_degrees: RING_ROTATION_DEGREES,
            origin: center,
            commands,
            filled_fraction: geometry.filled_fraction(animated_value, max),
        }
    }

    /// Ratio between rendered size and view box units.
    fn view_box_scale(&self) -> f64 {
        self.size.0 / self.view_box.2
    }

    /// Converts the foreground circle into an arc command in physical pixels.
    ///
    /// Returns `None` when the frame has no foreground circle. The sweep is
    /// clamped into `[0, 360]`; a `NaN` sweep becomes `0`.
    pub fn arc_command(&self, scale_factor: f64) -> Option<ProgressArcCommand> {
        let view_box_scale = self.view_box_scale();
        self.commands.iter().find_map(|command| match command {
            RingCommand::DashedCircle {
                stroke,
                stroke_width,
                ..
            } => {
                let sweep = (360.0 * self.filled_fraction).clamp(0.0, 360.0);
                Some(ProgressArcCommand {
                    color: *stroke,
                    stroke_width_px: Dp(stroke_width * view_box_scale).to_px_f32(scale_factor),
                    start_angle_degrees: self.rotation_degrees as f32,
                    sweep_angle_degrees: if sweep.is_nan() { 0.0 } else { sweep as f32 },
                })
            }
            RingCommand::Disc { .. } => None,
        })
    }
}

/// A stroked arc for GPU arc pipelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressArcCommand {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Start angle, clockwise from 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle, clockwise. The ends are butt-capped.
    pub sweep_angle_degrees: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Palette;

    fn frame(value: f64, max: f64) -> RingFrame {
        let geometry = RingGeometry::new(Dp(40.0), Dp(10.0));
        RingFrame::new(&geometry, value, max, Palette::GREEN_600, Palette::GREEN_400)
    }

    #[test]
    fn background_is_painted_first() {
        let frame = frame(0.0, 100.0);
        assert_eq!(frame.commands.len(), 2);
        assert!(matches!(
            frame.commands[0],
            RingCommand::Disc { radius, fill, .. } if radius == 40.0 && fill == Palette::GREEN_400
        ));
        match &frame.commands[1] {
            RingCommand::DashedCircle {
                center,
                radius,
                stroke_width,
                dash_array,
                dash_offset,
                ..
            } => {
                assert_eq!(*center, (50.0, 50.0));
                assert_eq!(*radius, 20.0);
                assert_eq!(*stroke_width, 40.0);
                assert_eq!(dash_array, dash_offset);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn frame_is_rotated_around_its_center() {
        let frame = frame(10.0, 100.0);
        assert_eq!(frame.rotation_degrees, -90.0);
        assert_eq!(frame.origin, (50.0, 50.0));
        assert_eq!(frame.size, (80.0, 80.0));
        assert_eq!(frame.view_box, (0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn arc_command_scales_to_pixels() {
        let arc = frame(25.0, 100.0).arc_command(2.0).expect("arc exists");
        // 40 view box units * 0.8 view box scale * 2.0 density.
        assert!((arc.stroke_width_px - 64.0).abs() < 1e-4);
        assert_eq!(arc.start_angle_degrees, -90.0);
        assert!((arc.sweep_angle_degrees - 90.0).abs() < 1e-4);
    }

    #[test]
    fn arc_sweep_is_clamped() {
        assert_eq!(frame(250.0, 100.0).arc_command(1.0).map(|a| a.sweep_angle_degrees), Some(360.0));
        assert_eq!(frame(-5.0, 100.0).arc_command(1.0).map(|a| a.sweep_angle_degrees), Some(0.0));
        assert_eq!(frame(0.0, 0.0).arc_command(1.0).map(|a| a.sweep_angle_degrees), Some(0.0));
    }
}
