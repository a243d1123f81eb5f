//! SVG output of a [`RingFrame`].
//!
//! The document mirrors the frame one to one: a `2·radius` square viewport
//! over a `2·half_circle` view box, a group rotated -90° about the center,
//! the background disc, then the dashed arc. [`RingFrame::to_tree`] feeds the
//! document through [`usvg`] for hosts that rasterize with the resvg stack.

use std::fmt;

use thiserror::Error;

use crate::command::{RingCommand, RingFrame};

/// Errors raised while turning a frame into a render tree.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The generated document was rejected by the SVG parser.
    #[error("failed to parse ring SVG: {0}")]
    Svg(#[from] usvg::Error),
}

impl fmt::Display for RingFrame {
    /// Writes this frame as a standalone SVG document.
    ///
    /// Non-finite values are written as Rust formats them (`NaN`, `inf`).
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size;
        let (min_x, min_y, vb_width, vb_height) = self.view_box;
        let (origin_x, origin_y) = self.origin;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{min_x} {min_y} {vb_width} {vb_height}" overflow="hidden">"#
        )?;
        writeln!(
            out,
            r#"  <g transform="rotate({} {origin_x} {origin_y})">"#,
            self.rotation_degrees
        )?;
        for command in &self.commands {
            match command {
                RingCommand::Disc {
                    center: (cx, cy),
                    radius,
                    fill,
                } => {
                    let (paint, opacity) = fill.to_svg_paint();
                    writeln!(
                        out,
                        r#"    <circle cx="{cx}" cy="{cy}" r="{radius}" fill="{paint}" fill-opacity="{opacity}" stroke="none" stroke-width="0"/>"#
                    )?;
                }
                RingCommand::DashedCircle {
                    center: (cx, cy),
                    radius,
                    stroke,
                    stroke_width,
                    dash_array,
                    dash_offset,
                } => {
                    let (paint, opacity) = stroke.to_svg_paint();
                    writeln!(
                        out,
                        r#"    <circle cx="{cx}" cy="{cy}" r="{radius}" fill="none" stroke="{paint}" stroke-opacity="{opacity}" stroke-width="{stroke_width}" stroke-linejoin="round" stroke-dasharray="{dash_array}" stroke-dashoffset="{dash_offset}"/>"#
                    )?;
                }
            }
        }
        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")
    }
}

impl RingFrame {
    /// Renders this frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Parses [`Self::to_svg`] into a `usvg` render tree.
    pub fn to_tree(&self) -> Result<usvg::Tree, RenderError> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(&self.to_svg(), &options)?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dp, Palette, RingGeometry};

    fn frame(value: f64, max: f64) -> RingFrame {
        let geometry = RingGeometry::new(Dp(40.0), Dp(10.0));
        RingFrame::new(&geometry, value, max, Palette::GREEN_600, Palette::GREEN_400)
    }

    fn count_paths(group: &usvg::Group) -> usize {
        group
            .children()
            .iter()
            .map(|node| match node {
                usvg::Node::Group(group) => count_paths(group),
                usvg::Node::Path(_) => 1,
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn document_has_viewport_and_rotation() {
        let svg = frame(50.0, 100.0).to_svg();
        assert!(svg.contains(r#"width="80" height="80" viewBox="0 0 100 100""#));
        assert!(svg.contains(r#"transform="rotate(-90 50 50)""#));
        assert!(svg.contains(r##"fill="#4ade80""##));
        assert!(svg.contains(r##"stroke="#16a34a""##));
        assert!(svg.contains(r#"stroke-width="40""#));
    }

    #[test]
    fn display_matches_to_svg() {
        let frame = frame(75.0, 100.0);
        let svg = frame.to_svg();
        assert_eq!(format!("{frame}"), svg);
        assert!(svg.contains(r#"stroke-linejoin="round""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn degenerate_offset_is_written_verbatim() {
        let svg = frame(0.0, 0.0).to_svg();
        assert!(svg.contains(r#"stroke-dashoffset="NaN""#));
    }

    #[test]
    fn document_parses_into_two_paths() {
        let tree = frame(30.0, 100.0).to_tree().expect("ring SVG is valid");
        assert_eq!(tree.size().width(), 80.0);
        assert_eq!(tree.size().height(), 80.0);
        assert_eq!(count_paths(tree.root()), 2);
    }
}
