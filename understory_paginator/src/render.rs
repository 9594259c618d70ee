// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render model: which dots to draw, how big, and in what color.

use kurbo::{Circle, Point};
use smallvec::SmallVec;

use crate::{Argb, DotStrip, ScaleTable};

/// Fraction of the (spacing + half the size delta) over which an edge dot fades out.
pub const SCALE_DISTANCE_FACTOR: f64 = 0.7;

/// Fraction of the center spacing over which a looped strip ramps a dot to full selection.
pub const CENTER_SCALE_DISTANCE_FACTOR: f64 = 6.0 / 7.0;

/// One dot to draw in the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotVisual {
    /// Index of the dot on the strip (a synthetic slot for looped overflow).
    pub index: usize,
    /// Horizontal center relative to the left edge of the window.
    pub center_offset: f64,
    /// Diameter after focal scaling and edge attenuation.
    pub diameter: f64,
    /// Selection scale in `[0, 1]` that drove diameter and color.
    pub scale: f64,
    /// Interpolated color.
    pub color: Argb,
}

impl DotVisual {
    /// Radius to draw with.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// The circle to fill for a host surface of the given `height`.
    #[must_use]
    pub fn circle(&self, height: f64) -> Circle {
        Circle::new(Point::new(self.center_offset, height / 2.0), self.radius())
    }
}

/// Dots of one frame in ascending index order.
pub type DotFrame = SmallVec<[DotVisual; 9]>;

/// A drawing surface able to fill circles.
///
/// Hosts implement this over their canvas or display list.
pub trait DrawSurface {
    /// Fills `circle` with `color`.
    fn draw_circle(&mut self, circle: Circle, color: Argb);
}

/// Issues one [`DrawSurface::draw_circle`] per dot, vertically centered in `height`.
pub fn draw_frame<S: DrawSurface + ?Sized>(frame: &[DotVisual], surface: &mut S, height: f64) {
    for dot in frame {
        surface.draw_circle(dot.circle(height), dot.color);
    }
}

/// Computes the dots to draw for the strip's current window.
///
/// Geometry, colors, and the minimum dot count come from the strip's
/// [`config`](DotStrip::config). Selection scales come from `scales`, except
/// for a looped strip that overflows its window, where each dot's scale is
/// derived from its distance to the window center.
#[must_use]
pub fn compute_frame(strip: &DotStrip, scales: &ScaleTable) -> DotFrame {
    let mut frame = DotFrame::new();
    let config = strip.config();
    let dot_count = strip.effective_dot_count();
    if dot_count < config.min_dot_count || dot_count == 0 {
        return frame;
    }

    let normal = strip.dot_diameter();
    let selected = strip.selected_dot_diameter();
    let spacing = strip.center_spacing();
    let scale_distance = (spacing + (selected - normal) / 2.0) * SCALE_DISTANCE_FACTOR;
    let small_scale_distance = selected / 2.0;
    let center_scale_distance = CENTER_SCALE_DISTANCE_FACTOR * spacing;

    let vp = strip.viewport();
    let frame_center = vp.center();
    let loop_overflow = strip.is_loop_overflow();

    for index in strip.candidate_range() {
        let dot = strip.dot_offset(index);
        if !vp.contains(dot) {
            continue;
        }

        let scale = if loop_overflow {
            ramp_scale(dot, frame_center, center_scale_distance)
        } else {
            scales.get(index)
        };
        let mut diameter = normal + (selected - normal) * scale;

        if strip.overflows() {
            let threshold = if !strip.is_looped() && (index == 0 || index == dot_count - 1) {
                small_scale_distance
            } else {
                scale_distance
            };
            let from_left = dot - vp.frame_position;
            let from_right = vp.end() - dot;
            let edge_distance = if from_left < threshold {
                Some(from_left)
            } else if from_right < threshold {
                Some(from_right)
            } else {
                None
            };
            if let Some(distance) = edge_distance {
                let attenuated = diameter * distance / threshold;
                if attenuated < diameter {
                    diameter = attenuated;
                }
            }
        }

        frame.push(DotVisual {
            index,
            center_offset: dot - vp.frame_position,
            diameter,
            scale,
            color: config.normal_color.lerp(config.selected_color, scale),
        });
    }

    tracing::trace!(
        dots = frame.len(),
        frame_position = vp.frame_position,
        "frame computed"
    );
    frame
}

/// Linear ramp peaking at `center`, reaching zero `distance` away on either side.
fn ramp_scale(dot: f64, center: f64, distance: f64) -> f64 {
    if dot >= center - distance && dot <= center {
        (dot - center + distance) / distance
    } else if dot > center && dot < center + distance {
        1.0 - (dot - center) / distance
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Circle;

    use super::{DotVisual, DrawSurface, compute_frame, draw_frame, ramp_scale};
    use crate::{Argb, DotStrip, PaginatorConfig, ScaleTable};

    fn setup(items: usize, looped: bool) -> DotStrip {
        let config = PaginatorConfig {
            looped,
            normal_color: Argb::BLACK,
            selected_color: Argb::WHITE,
            ..PaginatorConfig::default()
        };
        let mut strip = DotStrip::new(config).unwrap();
        strip.set_dot_count(items);
        strip
    }

    #[test]
    fn below_minimum_renders_nothing() {
        let strip = setup(1, false);
        assert!(compute_frame(&strip, &ScaleTable::new()).is_empty());

        let strip = setup(0, false);
        assert!(compute_frame(&strip, &ScaleTable::new()).is_empty());
    }

    #[test]
    fn fitting_strip_draws_every_dot_in_place() {
        let mut strip = setup(3, false);
        strip.adjust(0, 0.0);
        let mut scales = ScaleTable::new();
        scales.settle(1);

        let frame = compute_frame(&strip, &scales);
        let indices: Vec<usize> = frame.iter().map(|d| d.index).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(frame[0].center_offset, 5.0);
        assert_eq!(frame[1].center_offset, 17.0);
        // No edge attenuation when everything fits.
        assert_eq!(frame[0].diameter, 6.0);
        assert_eq!(frame[1].diameter, 10.0);
        assert_eq!(frame[1].color, Argb::WHITE);
        assert_eq!(frame[2].color, Argb::BLACK);
    }

    #[test]
    fn half_selected_dot_is_midway() {
        let mut strip = setup(3, false);
        strip.adjust(0, 0.5);
        let mut scales = ScaleTable::new();
        scales.set(0, 0.5);
        scales.set(1, 0.5);

        let frame = compute_frame(&strip, &scales);
        assert_eq!(frame[0].diameter, 8.0);
        assert_eq!(frame[0].color, Argb::from_argb(255, 128, 128, 128));
        assert_eq!(frame[1].diameter, 8.0);
    }

    #[test]
    fn edge_dots_shrink_toward_window_edges() {
        let mut strip = setup(10, false);
        strip.adjust(5, 0.0);
        let mut scales = ScaleTable::new();
        scales.settle(5);

        let frame = compute_frame(&strip, &scales);
        // Window [36, 94): dots 3..=7 at 41, 53, 65, 77, 89.
        let indices: Vec<usize> = frame.iter().map(|d| d.index).collect();
        assert_eq!(indices, [3, 4, 5, 6, 7]);

        // scale_distance = (12 + 2) * 0.7 = 9.8; dot 3 is 5 from the left edge.
        let expected = 6.0 * 5.0 / 9.8;
        assert!((frame[0].diameter - expected).abs() < 1e-9);
        assert!((frame[4].diameter - expected).abs() < 1e-9);
        assert_eq!(frame[2].diameter, 10.0);
        assert_eq!(frame[1].diameter, 6.0);
    }

    #[test]
    fn boundary_dots_use_the_smaller_threshold() {
        let mut strip = setup(10, false);
        strip.adjust(0, 0.0);
        let mut scales = ScaleTable::new();
        scales.settle(0);

        let frame = compute_frame(&strip, &scales);
        // Dot 0 sits exactly selected/2 from the left edge, so it keeps its size.
        assert_eq!(frame[0].index, 0);
        assert_eq!(frame[0].diameter, 10.0);
    }

    #[test]
    fn last_dot_uses_the_smaller_threshold() {
        let mut strip = setup(10, false);
        strip.adjust(9, 0.0);

        let frame = compute_frame(&strip, &ScaleTable::new());
        // Window [60, 118): dots 5..=9 at 65, 77, 89, 101, 113.
        let indices: Vec<usize> = frame.iter().map(|d| d.index).collect();
        assert_eq!(indices, [5, 6, 7, 8, 9]);

        // Both ends sit 5 from an edge: dot 5 fades over 9.8, dot 9 only below 5.
        assert!((frame[0].diameter - 6.0 * 5.0 / 9.8).abs() < 1e-9);
        assert_eq!(frame[4].diameter, 6.0);
    }

    #[test]
    fn looped_edge_slots_fade_over_the_full_distance() {
        let mut strip = setup(100, true);
        strip.adjust(0, 0.3);

        let frame = compute_frame(&strip, &ScaleTable::new());
        // Window [10.6, 68.6): slots 1..=5 at 12, 24, 36, 48, 60.
        let indices: Vec<usize> = frame.iter().map(|d| d.index).collect();
        assert_eq!(indices, [1, 2, 3, 4, 5]);

        let first = frame[0];
        assert!((first.center_offset - 1.4).abs() < 1e-9);
        assert!((first.diameter - 6.0 * 1.4 / 9.8).abs() < 1e-9);

        let last = frame[4];
        assert!((last.center_offset - 49.4).abs() < 1e-9);
        assert!((last.diameter - 6.0 * 8.6 / 9.8).abs() < 1e-9);
    }

    #[test]
    fn looped_overflow_peaks_at_window_center() {
        let mut strip = setup(100, true);
        let scales = ScaleTable::new();
        strip.adjust(17, 0.0);

        let frame = compute_frame(&strip, &scales);
        let center = frame
            .iter()
            .find(|d| d.index == 3)
            .expect("middle slot must be visible");
        assert_eq!(center.scale, 1.0);
        assert_eq!(center.diameter, 10.0);
        assert!(
            frame.iter().filter(|d| d.index != 3).all(|d| d.scale == 0.0),
            "only the centered slot is selected at rest"
        );
    }

    #[test]
    fn ramp_is_symmetric() {
        assert_eq!(ramp_scale(10.0, 10.0, 4.0), 1.0);
        assert_eq!(ramp_scale(8.0, 10.0, 4.0), 0.5);
        assert_eq!(ramp_scale(12.0, 10.0, 4.0), 0.5);
        assert_eq!(ramp_scale(14.0, 10.0, 4.0), 0.0);
        assert_eq!(ramp_scale(5.0, 10.0, 4.0), 0.0);
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Circle, Argb)>,
    }

    impl DrawSurface for Recorder {
        fn draw_circle(&mut self, circle: Circle, color: Argb) {
            self.calls.push((circle, color));
        }
    }

    #[test]
    fn draw_frame_centers_vertically() {
        let frame = [DotVisual {
            index: 0,
            center_offset: 7.0,
            diameter: 6.0,
            scale: 0.0,
            color: Argb::BLACK,
        }];
        let mut surface = Recorder::default();
        draw_frame(&frame, &mut surface, 20.0);
        assert_eq!(surface.calls.len(), 1);
        let (circle, color) = surface.calls[0];
        assert_eq!(circle.center.x, 7.0);
        assert_eq!(circle.center.y, 10.0);
        assert_eq!(circle.radius, 3.0);
        assert_eq!(color, Argb::BLACK);
    }
}
