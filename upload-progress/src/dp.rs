//! # Density-Independent Pixels (Dp)
//!
//! Ring dimensions are declared in [`Dp`] and converted to physical pixels
//! only when a host asks for pixel-space draw commands.

/// Density-independent length.
///
/// The wrapped `f64` is the logical size. Geometry is computed on the raw
/// value so the ring math stays exact regardless of the display density.
///
/// ```
/// use upload_progress::Dp;
///
/// let radius = Dp(40.0);
/// assert_eq!(radius.to_px_f32(2.0), 80.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts to physical pixels with the given scale factor.
    pub fn to_px_f32(self, scale_factor: f64) -> f32 {
        (self.0 * scale_factor) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_scaling() {
        assert_eq!(Dp(10.0).to_px_f32(1.0), 10.0);
        assert_eq!(Dp(10.0).to_px_f32(2.5), 25.0);
        assert_eq!(Dp(-4.0).to_px_f32(3.0), -12.0);
    }
}
