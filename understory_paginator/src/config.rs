// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved paginator styling and geometry.

use crate::{Argb, PaginatorError, Result};

/// Resolved configuration for a [`Paginator`](crate::Paginator).
///
/// All lengths are in the host's logical pixel space. Hosts resolve styling
/// from whatever configuration source they use and hand the final numbers in;
/// nothing here is re-parsed at runtime.
///
/// With the `serde` feature, fields (de)serialize under the option names
/// `dotSize`, `dotSelectSize`, `dotSpace`, `dotNormalColor`, `dotSelectColor`,
/// `visibleDotCount`, `minVisibleDotCount`, and `looped`. Missing options fall
/// back to [`PaginatorConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginatorConfig {
    /// Diameter of a dot that is not selected.
    #[cfg_attr(feature = "serde", serde(rename = "dotSize"))]
    pub dot_diameter: f64,
    /// Diameter of the fully selected dot.
    #[cfg_attr(feature = "serde", serde(rename = "dotSelectSize"))]
    pub selected_dot_diameter: f64,
    /// Gap between the edges of two adjacent normal dots.
    #[cfg_attr(feature = "serde", serde(rename = "dotSpace"))]
    pub dot_gap: f64,
    /// Number of dots shown at once; must be odd.
    #[cfg_attr(feature = "serde", serde(rename = "visibleDotCount"))]
    pub visible_dot_count: usize,
    /// Below this many dots nothing is drawn.
    #[cfg_attr(feature = "serde", serde(rename = "minVisibleDotCount"))]
    pub min_dot_count: usize,
    /// Color of an unselected dot.
    #[cfg_attr(feature = "serde", serde(rename = "dotNormalColor"))]
    pub normal_color: Argb,
    /// Color of the fully selected dot.
    #[cfg_attr(feature = "serde", serde(rename = "dotSelectColor"))]
    pub selected_color: Argb,
    /// Whether the underlying pager wraps around.
    pub looped: bool,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            dot_diameter: 6.0,
            selected_dot_diameter: 10.0,
            dot_gap: 6.0,
            visible_dot_count: 5,
            min_dot_count: 2,
            normal_color: Argb::from_u32(0x80FF_FFFF),
            selected_color: Argb::WHITE,
            looped: false,
        }
    }
}

impl PaginatorConfig {
    /// Distance between the centers of two adjacent dots.
    #[must_use]
    pub fn center_spacing(&self) -> f64 {
        self.dot_gap + self.dot_diameter
    }

    /// Number of synthetic slots used to render a looped strip that overflows the window.
    #[must_use]
    pub const fn infinity_dot_count(&self) -> usize {
        self.visible_dot_count.saturating_add(2)
    }

    /// Checks the invariants the layout math relies on.
    ///
    /// - `visible_dot_count` must be odd and leave room for two more slots.
    /// - `min_dot_count` must be at least 2.
    /// - Diameters and gap must be finite and non-negative.
    /// - The center spacing must be strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_visible_dot_count(self.visible_dot_count)?;
        if self.min_dot_count < 2 {
            return Err(PaginatorError::MinDotCountTooSmall {
                count: self.min_dot_count,
            });
        }
        let lengths = [self.dot_diameter, self.selected_dot_diameter, self.dot_gap];
        if lengths.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(PaginatorError::InvalidGeometry {
                reason: "dot sizes and gap must be finite and non-negative",
            });
        }
        if self.center_spacing() <= 0.0 {
            return Err(PaginatorError::InvalidGeometry {
                reason: "center spacing must be positive",
            });
        }
        Ok(())
    }
}

pub(crate) fn check_visible_dot_count(count: usize) -> Result<()> {
    if count % 2 == 0 {
        Err(PaginatorError::EvenVisibleDotCount { count })
    } else if count.checked_add(2).is_none() {
        Err(PaginatorError::VisibleDotCountOverflow { count })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PaginatorConfig;
    use crate::{ErrorKind, PaginatorError};

    #[test]
    fn default_config_is_valid() {
        let config = PaginatorConfig::default();
        assert!(config.validate().is_ok(), "default config must validate");
        assert_eq!(config.center_spacing(), 12.0);
        assert_eq!(config.infinity_dot_count(), 7);
    }

    #[test]
    fn even_visible_count_is_rejected() {
        for count in [0, 2, 4] {
            let config = PaginatorConfig {
                visible_dot_count: count,
                ..PaginatorConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn min_dot_count_below_two_is_rejected() {
        for count in [0, 1] {
            let config = PaginatorConfig {
                min_dot_count: count,
                ..PaginatorConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(PaginatorError::MinDotCountTooSmall { count })
            );
        }
        let config = PaginatorConfig {
            min_dot_count: 3,
            ..PaginatorConfig::default()
        };
        assert!(config.validate().is_ok(), "min count 3 must validate");
    }

    #[test]
    fn oversized_visible_count_is_rejected() {
        let config = PaginatorConfig {
            visible_dot_count: usize::MAX,
            ..PaginatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PaginatorError::VisibleDotCountOverflow { count: usize::MAX })
        );
        assert_eq!(config.infinity_dot_count(), usize::MAX);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let zero_spacing = PaginatorConfig {
            dot_diameter: 0.0,
            dot_gap: 0.0,
            ..PaginatorConfig::default()
        };
        assert!(zero_spacing.validate().is_err(), "zero spacing must fail");

        let nan_size = PaginatorConfig {
            selected_dot_diameter: f64::NAN,
            ..PaginatorConfig::default()
        };
        assert!(nan_size.validate().is_err(), "NaN diameter must fail");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_option_names_with_defaults() {
        let json = r#"{
            "dotSize": 8.0,
            "dotSelectSize": 14.0,
            "dotSpace": 4.0,
            "dotNormalColor": 2164260863,
            "visibleDotCount": 7,
            "minVisibleDotCount": 3
        }"#;
        let config: PaginatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.dot_diameter, 8.0);
        assert_eq!(config.selected_dot_diameter, 14.0);
        assert_eq!(config.center_spacing(), 12.0);
        assert_eq!(config.visible_dot_count, 7);
        assert_eq!(config.min_dot_count, 3);
        assert_eq!(config.normal_color.to_u32(), 0x80FF_FFFF);
        // Omitted keys keep their defaults.
        assert_eq!(config.selected_color, PaginatorConfig::default().selected_color);
        assert!(!config.looped);
    }
}
