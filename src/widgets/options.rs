//! Enumerated and range-checked widget options.
//!
//! These are pass-through configuration values chosen in the page builder.
//! Each enum round-trips through the exact strings the builder stores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

macro_rules! string_option {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in page-builder order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string stored by the page builder.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = WidgetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(WidgetError::UnknownVariant {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

string_option! {
    /// Side of the main image the thumbnails sit on.
    Position, "position", default = Left,
    { Left => "left", Right => "right" }
}

string_option! {
    /// Direction the thumbnail strip runs in.
    ThumbnailsOrientation, "thumbnails orientation", default = Horizontal,
    { Vertical => "vertical", Horizontal => "horizontal" }
}

string_option! {
    /// How the main image zooms.
    ZoomType, "zoom type", default = InPage,
    { Gallery => "gallery", InPage => "in-page", NoZoom => "no-zoom" }
}

string_option! {
    /// Card aspect in the category highlight grid.
    CardShape, "card shape", default = Squared,
    { Squared => "squared", Rectangular => "rectangular" }
}

// ---------------------------------------------------------------------------
// BgOpacity
// ---------------------------------------------------------------------------

/// Gallery backdrop opacity: `[0.0, 1.0]` in steps of `0.01`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BgOpacity(f64);

impl BgOpacity {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
    pub const STEP: f64 = 0.01;
    /// Value suggested by the page builder.
    pub const DEFAULT: BgOpacity = BgOpacity(0.8);

    /// Validate range and step.
    pub fn new(value: f64) -> Result<Self, WidgetError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(WidgetError::OpacityOutOfRange(value));
        }
        let steps = value / Self::STEP;
        if (steps - steps.round()).abs() > 1e-6 {
            return Err(WidgetError::OpacityStep(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for BgOpacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for BgOpacity {
    type Error = WidgetError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BgOpacity> for f64 {
    fn from(opacity: BgOpacity) -> Self {
        opacity.0
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_builder_strings() {
        assert_eq!("in-page".parse::<ZoomType>().unwrap(), ZoomType::InPage);
        assert_eq!("no-zoom".parse::<ZoomType>().unwrap(), ZoomType::NoZoom);
        assert_eq!("right".parse::<Position>().unwrap(), Position::Right);
        assert_eq!(
            "vertical".parse::<ThumbnailsOrientation>().unwrap(),
            ThumbnailsOrientation::Vertical
        );
        assert_eq!("rectangular".parse::<CardShape>().unwrap(), CardShape::Rectangular);
    }

    #[test]
    fn unknown_string_is_an_error() {
        let err = "top".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            WidgetError::UnknownVariant {
                kind: "position",
                value: "top".into()
            }
        );
    }

    #[test]
    fn display_matches_serde() {
        for zoom in ZoomType::ALL {
            let json = serde_json::to_value(zoom).unwrap();
            assert_eq!(json, zoom.to_string());
        }
    }

    #[test]
    fn defaults_follow_widget_props() {
        assert_eq!(Position::default(), Position::Left);
        assert_eq!(ThumbnailsOrientation::default(), ThumbnailsOrientation::Horizontal);
        assert_eq!(ZoomType::default(), ZoomType::InPage);
        assert_eq!(CardShape::default(), CardShape::Squared);
    }

    #[test]
    fn opacity_accepts_bounds_and_steps() {
        assert_eq!(BgOpacity::new(0.0).unwrap().get(), 0.0);
        assert_eq!(BgOpacity::new(1.0).unwrap().get(), 1.0);
        assert_eq!(BgOpacity::new(0.37).unwrap().get(), 0.37);
    }

    #[test]
    fn opacity_rejects_out_of_range() {
        assert_eq!(BgOpacity::new(1.01), Err(WidgetError::OpacityOutOfRange(1.01)));
        assert_eq!(BgOpacity::new(-0.1), Err(WidgetError::OpacityOutOfRange(-0.1)));
        assert!(BgOpacity::new(f64::NAN).is_err());
    }

    #[test]
    fn opacity_rejects_off_step() {
        assert_eq!(BgOpacity::new(0.505), Err(WidgetError::OpacityStep(0.505)));
    }

    #[test]
    fn opacity_deserialization_validates() {
        let ok: BgOpacity = serde_json::from_str("0.5").unwrap();
        assert_eq!(ok.get(), 0.5);
        assert!(serde_json::from_str::<BgOpacity>("2.0").is_err());
    }
}
