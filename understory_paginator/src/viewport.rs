// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and viewport tracking for a strip of dots.
//!
//! Dot centers live on a 1D axis: dot `i` sits at
//! `first_dot_offset + i * center_spacing`. The [`Viewport`] is a window of
//! fixed width sliding along that axis. When every dot fits, the window stays
//! at the origin; otherwise it follows the scroll position, pinned near the
//! ends of a bounded strip and re-centered on a fixed synthetic window for a
//! looped strip.

use core::ops::Range;

use kurbo::Size;

use crate::config::check_visible_dot_count;
use crate::util::floor_index;
use crate::{Argb, MeasureSpec, PaginatorConfig, Result};

/// The horizontal window of the dot strip that is currently rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Left edge of the window, in dot-axis coordinates.
    pub frame_position: f64,
    /// Width of the window.
    pub frame_width: f64,
    /// Axis coordinate of dot 0's center.
    pub first_dot_offset: f64,
}

impl Viewport {
    /// Axis coordinate of the window's center.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.frame_position + self.frame_width / 2.0
    }

    /// Axis coordinate one past the window's right edge.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.frame_position + self.frame_width
    }

    /// Returns `true` if `x` lies in `[frame_position, end)`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.frame_position && x < self.end()
    }
}

/// Layout/viewport engine for a paginator's dot strip.
///
/// This type:
/// - tracks the item count, visible window size, and loop flag,
/// - derives the window width and dot origin whenever the count changes,
/// - moves the window in response to scroll positions,
/// - answers measurement queries.
///
/// It holds the config and geometry; selection scales live in the controller.
#[derive(Clone, Debug)]
pub struct DotStrip {
    config: PaginatorConfig,
    item_count: usize,
    initialized: bool,
    viewport: Viewport,
}

impl DotStrip {
    /// Creates an uninitialized strip with no items.
    ///
    /// Fails if `config` does not [validate](PaginatorConfig::validate).
    pub fn new(config: PaginatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            item_count: 0,
            initialized: false,
            viewport: Viewport::default(),
        })
    }

    /// The configuration the strip lays out with.
    #[must_use]
    pub const fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Replaces the dot colors. Layout is unaffected.
    pub(crate) fn set_colors(&mut self, normal: Argb, selected: Argb) {
        self.config.normal_color = normal;
        self.config.selected_color = selected;
    }

    /// Number of pages the strip represents.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of dots shown at once.
    #[must_use]
    pub const fn visible_dot_count(&self) -> usize {
        self.config.visible_dot_count
    }

    /// Size of the synthetic window used by a looped strip that overflows.
    #[must_use]
    pub const fn infinity_dot_count(&self) -> usize {
        self.config.infinity_dot_count()
    }

    /// Whether the strip is looped.
    #[must_use]
    pub const fn is_looped(&self) -> bool {
        self.config.looped
    }

    /// Whether a dot count has been applied since creation or the last detach.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Normal dot diameter.
    #[must_use]
    pub const fn dot_diameter(&self) -> f64 {
        self.config.dot_diameter
    }

    /// Fully selected dot diameter.
    #[must_use]
    pub const fn selected_dot_diameter(&self) -> f64 {
        self.config.selected_dot_diameter
    }

    /// Distance between adjacent dot centers.
    #[must_use]
    pub fn center_spacing(&self) -> f64 {
        self.config.center_spacing()
    }

    /// The current window.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns `true` if there are more items than visible dots.
    #[must_use]
    pub const fn overflows(&self) -> bool {
        self.item_count > self.config.visible_dot_count
    }

    /// Returns `true` if the strip renders through the synthetic looped window.
    #[must_use]
    pub const fn is_loop_overflow(&self) -> bool {
        self.config.looped && self.overflows()
    }

    /// Number of dot slots laid out on the axis.
    ///
    /// This is the item count, except for a looped strip that overflows, which
    /// always lays out [`infinity_dot_count`](Self::infinity_dot_count) slots.
    #[must_use]
    pub const fn effective_dot_count(&self) -> usize {
        if self.is_loop_overflow() {
            self.infinity_dot_count()
        } else {
            self.item_count
        }
    }

    /// Axis coordinate of dot `index`'s center.
    #[must_use]
    pub fn dot_offset(&self, index: usize) -> f64 {
        self.viewport.first_dot_offset + index as f64 * self.center_spacing()
    }

    /// Width of an unwindowed strip of `count` dots.
    #[must_use]
    pub fn dots_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (count - 1) as f64 * self.center_spacing() + self.config.selected_dot_diameter
    }

    /// Applies a new item count.
    ///
    /// Returns `false` without touching anything if the strip is already
    /// initialized with the same count. Otherwise recomputes the window width
    /// and dot origin and returns `true`; the caller should re-measure and redraw.
    pub fn set_dot_count(&mut self, count: usize) -> bool {
        if self.initialized && self.item_count == count {
            return false;
        }
        self.item_count = count;
        self.initialized = true;
        self.relayout();
        tracing::debug!(
            item_count = count,
            frame_width = self.viewport.frame_width,
            first_dot_offset = self.viewport.first_dot_offset,
            "dot strip laid out"
        );
        true
    }

    /// Changes the number of visible dots. `count` must be odd.
    pub fn set_visible_dot_count(&mut self, count: usize) -> Result<()> {
        check_visible_dot_count(count)?;
        self.config.visible_dot_count = count;
        if self.initialized {
            self.relayout();
        }
        tracing::debug!(visible_dot_count = count, "visible dot count changed");
        Ok(())
    }

    /// Changes the loop flag.
    ///
    /// The window width and dot origin are left as they are until the next
    /// count change; only a redraw is needed.
    pub fn set_looped(&mut self, looped: bool) {
        self.config.looped = looped;
    }

    /// Forgets the applied count so the next [`set_dot_count`](Self::set_dot_count)
    /// lays out again even if the count is unchanged.
    pub fn detach(&mut self) {
        self.initialized = false;
    }

    fn relayout(&mut self) {
        self.viewport.frame_width = self.dots_width(self.config.visible_dot_count);
        self.viewport.first_dot_offset = if self.is_loop_overflow() {
            0.0
        } else {
            self.config.selected_dot_diameter / 2.0
        };
    }

    /// Measures the strip for the host.
    ///
    /// Width is the full strip when fewer than `visible_dot_count` items exist,
    /// otherwise the fixed window width. Height resolves `height` against the
    /// selected diameter.
    #[must_use]
    pub fn measure(&self, height: MeasureSpec) -> Size {
        let width = if self.item_count < self.config.visible_dot_count {
            self.dots_width(self.item_count)
        } else {
            self.viewport.frame_width
        };
        Size::new(width, height.resolve(self.config.selected_dot_diameter))
    }

    /// Measures the strip as a design-time preview with no item count.
    #[must_use]
    pub fn measure_preview(&self, height: MeasureSpec) -> Size {
        Size::new(
            self.dots_width(self.config.visible_dot_count),
            height.resolve(self.config.selected_dot_diameter),
        )
    }

    /// Moves the window for a scroll state of `page` plus `offset` toward the next page.
    pub fn adjust(&mut self, page: usize, offset: f64) {
        let half_width = self.viewport.frame_width / 2.0;
        let spacing = self.center_spacing();
        let position = if !self.overflows() {
            0.0
        } else if !self.config.looped {
            let center = self.dot_offset(page) + spacing * offset;
            let edge = self.config.visible_dot_count / 2;
            let first_centered = self.dot_offset(edge);
            let last_centered = self.dot_offset(self.effective_dot_count() - 1 - edge);
            // Hold still once the centered dot is within half a window of either end.
            if center < first_centered {
                first_centered - half_width
            } else if center > last_centered {
                last_centered - half_width
            } else {
                center - half_width
            }
        } else {
            // Always anchor on the middle synthetic slot.
            let center = self.dot_offset(self.infinity_dot_count() / 2) + spacing * offset;
            center - half_width
        };
        self.viewport.frame_position = position;
        tracing::trace!(page, offset, frame_position = position, "viewport adjusted");
    }

    /// Indices whose centers may fall inside the window.
    ///
    /// The range is derived by inverting [`dot_offset`](Self::dot_offset)
    /// against the window and is bounded by
    /// [`effective_dot_count`](Self::effective_dot_count). Callers still need
    /// to test each center against [`Viewport::contains`].
    #[must_use]
    pub fn candidate_range(&self) -> Range<usize> {
        let dot_count = self.effective_dot_count();
        let vp = self.viewport;
        let spacing = self.center_spacing();
        let first = floor_index((vp.frame_position - vp.first_dot_offset) / spacing);
        let span = floor_index((vp.end() - self.dot_offset(first)) / spacing);
        let mut last = first.saturating_add(span);
        if first == 0 && last.saturating_add(1) > dot_count {
            last = dot_count.saturating_sub(1);
        }
        let end = last.saturating_add(1).min(dot_count);
        first.min(end)..end
    }
}
