//! Ring geometry and the stroke-dash math that fakes a filling arc.
//!
//! The foreground arc is a circle of radius `radius / 2` stroked with a line
//! `radius` wide, so the stroke covers the whole disc. Its dash array equals
//! the circumference; shifting the dash offset from `circumference` down to
//! `0` reveals the stroke from nothing to a full ring.
//!
//! None of these functions validate their inputs. A zero `max` or a negative
//! radius produce whatever IEEE arithmetic produces.

use std::f64::consts::PI;

use crate::Dp;

/// Static geometry of one ring, derived from its radius and stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    radius: f64,
    stroke_width: f64,
}

impl RingGeometry {
    /// Creates the geometry for a ring.
    pub fn new(radius: Dp, stroke_width: Dp) -> Self {
        Self {
            radius: radius.0,
            stroke_width: stroke_width.0,
        }
    }

    /// Outer radius of the background disc.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Length of the dashed circle, `2π(radius/2)`.
    pub fn circumference(&self) -> f64 {
        2.0 * PI * (self.radius / 2.0)
    }

    /// Half the edge of the view box, `radius + stroke_width`.
    pub fn half_circle(&self) -> f64 {
        self.radius + self.stroke_width
    }

    /// Rendered bounding box `(width, height)`, always `2·radius` square.
    pub fn bounding_box(&self) -> (f64, f64) {
        (self.radius * 2.0, self.radius * 2.0)
    }

    /// View box `(min_x, min_y, width, height)` of the drawing surface.
    pub fn view_box(&self) -> (f64, f64, f64, f64) {
        let edge = self.half_circle() * 2.0;
        (0.0, 0.0, edge, edge)
    }

    /// Center of both circles in view box coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.half_circle(), self.half_circle())
    }

    /// Radius of the dashed foreground circle.
    pub fn arc_radius(&self) -> f64 {
        self.radius / 2.0
    }

    /// Stroke width of the foreground circle. Equal to `radius`, not to the
    /// declared stroke width.
    pub fn arc_stroke_width(&self) -> f64 {
        self.radius
    }

    /// Dash offset that shows `animated_value` out of `max`.
    ///
    /// `max == 0` yields `NaN` or an infinity.
    pub fn stroke_dash_offset(&self, animated_value: f64, max: f64) -> f64 {
        let circumference = self.circumference();
        let max_perc = (100.0 * animated_value) / max;
        circumference - (circumference * max_perc) / 100.0
    }

    /// Visible share of the arc for a given dash offset, `1 - offset / C`.
    ///
    /// Not clamped: values above `max` overshoot past `1.0`.
    pub fn filled_fraction(&self, animated_value: f64, max: f64) -> f64 {
        1.0 - self.stroke_dash_offset(animated_value, max) / self.circumference()
    }
}
