//! Plain-data ring configuration, loadable from config files.
//!
//! With the `serde` feature enabled [`RingConfig`] derives `Deserialize`, so
//! a TOML or JSON table maps straight onto it. Every field is optional and
//! falls back to the [`ProgressRingArgs`] default.

use std::time::Duration;

use thiserror::Error;

use crate::{ColorParseError, Dp, ProgressRingArgs};

/// Errors raised while turning a [`RingConfig`] into args.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A color field is not a valid hex color.
    #[error("invalid color in `{field}`: {source}")]
    Color {
        /// Name of the offending field.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: ColorParseError,
    },
}

/// Serializable mirror of [`ProgressRingArgs`] without the callback.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RingConfig {
    /// See [`ProgressRingArgs::percentage`].
    pub percentage: Option<f64>,
    /// Radius in dp.
    pub radius: Option<f64>,
    /// Stroke width in dp.
    pub stroke_width: Option<f64>,
    /// Pass length in milliseconds.
    pub duration_ms: Option<u64>,
    /// Hex color of the arc.
    pub color_inner: Option<String>,
    /// Hex color of the background disc.
    pub color_outer: Option<String>,
    /// See [`ProgressRingArgs::max`].
    pub max: Option<f64>,
    /// See [`ProgressRingArgs::looping`].
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: Option<bool>,
}

impl RingConfig {
    /// Applies the configured fields on top of the default args.
    pub fn into_args(self) -> Result<ProgressRingArgs, ConfigError> {
        self.apply(ProgressRingArgs::default())
    }

    /// Applies the configured fields on top of `args`.
    pub fn apply(self, mut args: ProgressRingArgs) -> Result<ProgressRingArgs, ConfigError> {
        if let Some(percentage) = self.percentage {
            args.percentage = percentage;
        }
        if let Some(radius) = self.radius {
            args.radius = Dp(radius);
        }
        if let Some(stroke_width) = self.stroke_width {
            args.stroke_width = Dp(stroke_width);
        }
        if let Some(duration_ms) = self.duration_ms {
            args.duration = Duration::from_millis(duration_ms);
        }
        if let Some(color) = self.color_inner {
            args.color_inner = color.parse().map_err(|source| ConfigError::Color {
                field: "color_inner",
                source,
            })?;
        }
        if let Some(color) = self.color_outer {
            args.color_outer = color.parse().map_err(|source| ConfigError::Color {
                field: "color_outer",
                source,
            })?;
        }
        if let Some(max) = self.max {
            args.max = max;
        }
        if let Some(looping) = self.looping {
            args.looping = looping;
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Palette};

    #[test]
    fn empty_config_yields_defaults() {
        let args = RingConfig::default().into_args().expect("defaults are valid");
        assert_eq!(args, ProgressRingArgs::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = RingConfig {
            percentage: Some(25.0),
            duration_ms: Some(1200),
            color_inner: Some("#000".into()),
            looping: Some(true),
            ..Default::default()
        };
        let args = config.into_args().expect("config is valid");
        assert_eq!(args.percentage, 25.0);
        assert_eq!(args.duration, Duration::from_millis(1200));
        assert_eq!(args.color_inner, Color::BLACK);
        assert_eq!(args.color_outer, Palette::GREEN_400);
        assert!(args.looping);
    }

    #[test]
    fn bad_color_names_the_field() {
        let config = RingConfig {
            color_outer: Some("#zz0000".into()),
            ..Default::default()
        };
        let err = config.into_args().expect_err("color is invalid");
        assert_eq!(
            err,
            ConfigError::Color {
                field: "color_outer",
                source: ColorParseError::InvalidDigit('z'),
            }
        );
    }
}
