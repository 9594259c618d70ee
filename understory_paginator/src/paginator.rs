// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paginator controller: validation, selection state, and invalidation.

use kurbo::Size;

use crate::render::{DotFrame, DrawSurface, compute_frame, draw_frame};
use crate::source::{PageSink, PagerAdapter};
use crate::{
    Argb, DotStrip, MeasureSpec, PaginatorConfig, PaginatorError, Result, ScaleTable, Viewport,
};

bitflags::bitflags! {
    /// Work the host should schedule after a paginator call.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// Size may have changed; measure again.
        const MEASURE = 0b0000_0001;
        /// Appearance changed; draw again.
        const REDRAW  = 0b0000_0010;
    }
}

/// A page indicator driven by scroll offsets.
///
/// `Paginator` owns a [`DotStrip`] for layout, which holds the
/// [`PaginatorConfig`], and a [`ScaleTable`] describing how selected each dot
/// is. Inbound calls validate their arguments, update state, and record an
/// [`Invalidation`] that the host drains with
/// [`take_invalidation`](Self::take_invalidation) and coalesces
/// into its own measure/redraw scheduling.
///
/// Selection follows two regimes:
/// - *Idle*: after [`set_current_position`](Self::set_current_position), exactly
///   one dot is fully selected.
/// - *Scrolling*: after [`on_scroll`](Self::on_scroll), selection is split
///   between the current page and the next one in proportion to the offset.
///
/// A looped strip with more items than visible dots ignores the table and
/// selects whichever dot is nearest the window center.
#[derive(Clone, Debug)]
pub struct Paginator {
    strip: DotStrip,
    scales: ScaleTable,
    invalidation: Invalidation,
}

impl Paginator {
    /// Creates a paginator with no items.
    ///
    /// Fails if `config` does not [validate](PaginatorConfig::validate).
    pub fn new(config: PaginatorConfig) -> Result<Self> {
        Ok(Self {
            strip: DotStrip::new(config)?,
            scales: ScaleTable::new(),
            invalidation: Invalidation::MEASURE | Invalidation::REDRAW,
        })
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &PaginatorConfig {
        self.strip.config()
    }

    /// The layout engine.
    #[must_use]
    pub const fn strip(&self) -> &DotStrip {
        &self.strip
    }

    /// The current window over the strip.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.strip.viewport()
    }

    /// The selection scales set by the last scroll or settle.
    #[must_use]
    pub const fn scales(&self) -> &ScaleTable {
        &self.scales
    }

    /// Selection scale of dot `index` from the table.
    #[must_use]
    pub fn scale_at(&self, index: usize) -> f64 {
        self.scales.get(index)
    }

    /// Number of pages.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.strip.item_count()
    }

    /// Number of dots shown at once.
    #[must_use]
    pub const fn visible_dot_count(&self) -> usize {
        self.strip.visible_dot_count()
    }

    /// Whether the pager wraps around.
    #[must_use]
    pub const fn is_looped(&self) -> bool {
        self.strip.is_looped()
    }

    /// Returns and clears the accumulated invalidation.
    pub fn take_invalidation(&mut self) -> Invalidation {
        core::mem::take(&mut self.invalidation)
    }

    /// Accumulated invalidation, without clearing it.
    #[must_use]
    pub const fn pending_invalidation(&self) -> Invalidation {
        self.invalidation
    }

    /// Sets the number of pages. Re-laying out with an unchanged count is a no-op.
    pub fn set_dot_count(&mut self, count: usize) {
        if self.strip.set_dot_count(count) {
            self.invalidation |= Invalidation::MEASURE | Invalidation::REDRAW;
        }
    }

    /// Sets how many dots are shown at once. `count` must be odd.
    pub fn set_visible_dot_count(&mut self, count: usize) -> Result<()> {
        self.strip.set_visible_dot_count(count)?;
        self.invalidation |= Invalidation::MEASURE | Invalidation::REDRAW;
        Ok(())
    }

    /// Sets whether the pager wraps around.
    pub fn set_looped(&mut self, looped: bool) {
        self.strip.set_looped(looped);
        self.invalidation |= Invalidation::REDRAW;
    }

    /// Color of an unselected dot.
    #[must_use]
    pub const fn dot_color(&self) -> Argb {
        self.config().normal_color
    }

    /// Sets the color of an unselected dot.
    pub fn set_dot_color(&mut self, color: Argb) {
        let selected = self.selected_dot_color();
        self.strip.set_colors(color, selected);
        self.invalidation |= Invalidation::REDRAW;
    }

    /// Color of the fully selected dot.
    #[must_use]
    pub const fn selected_dot_color(&self) -> Argb {
        self.config().selected_color
    }

    /// Sets the color of the fully selected dot.
    pub fn set_selected_dot_color(&mut self, color: Argb) {
        let normal = self.dot_color();
        self.strip.set_colors(normal, color);
        self.invalidation |= Invalidation::REDRAW;
    }

    /// Reports that `page` is scrolled `offset` of the way toward the next page.
    ///
    /// `offset` must be in `[0, 1]`; `page` must be below the item count unless
    /// it is `0`. The last page hands off to page `0`. The paginator never
    /// advances `page` on its own: a caller reaching `offset == 1.0` should
    /// report `(page + 1, 0.0)` next.
    pub fn on_scroll(&mut self, page: usize, offset: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(PaginatorError::OffsetOutOfRange { offset });
        }
        let count = self.strip.item_count();
        if page != 0 && page >= count {
            return Err(PaginatorError::IndexOutOfRange { index: page, len: count });
        }

        let visible = self.strip.visible_dot_count();
        if !self.strip.is_looped() || (count <= visible && count > 1) {
            self.scales.clear();
            if self.strip.effective_dot_count() != 0 {
                self.scales.set(page, 1.0 - offset);
                if page + 1 < count {
                    self.scales.set(page + 1, offset);
                } else if count > 1 {
                    self.scales.set(0, offset);
                }
            }
        }
        self.strip.adjust(page, offset);
        self.invalidation |= Invalidation::REDRAW;
        Ok(())
    }

    /// Settles the selection on `position`.
    ///
    /// `position` must be below the item count unless it is `0`; with no items
    /// this does nothing.
    pub fn set_current_position(&mut self, position: usize) -> Result<()> {
        let count = self.strip.item_count();
        if position != 0 && position >= count {
            return Err(PaginatorError::IndexOutOfRange {
                index: position,
                len: count,
            });
        }
        if count == 0 {
            return Ok(());
        }
        self.strip.adjust(position, 0.0);
        if !self.strip.is_looped() || count < self.strip.visible_dot_count() {
            self.scales.settle(position);
        }
        self.invalidation |= Invalidation::REDRAW;
        Ok(())
    }

    /// Measures the strip against the host's height constraint.
    #[must_use]
    pub fn measure(&self, height: MeasureSpec) -> Size {
        self.strip.measure(height)
    }

    /// Measures the strip for a design-time preview without items.
    #[must_use]
    pub fn measure_preview(&self, height: MeasureSpec) -> Size {
        self.strip.measure_preview(height)
    }

    /// Computes the dots to draw for the current state.
    #[must_use]
    pub fn compute_frame(&self) -> DotFrame {
        compute_frame(&self.strip, &self.scales)
    }

    /// Draws the current frame onto `surface`, vertically centered in `height`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, height: f64) {
        draw_frame(&self.compute_frame(), surface, height);
    }

    /// Binds this paginator to `pager` through `adapter`.
    ///
    /// The previous binding's layout is forgotten so the adapter's initial dot
    /// count always lays out. Hosts detach any previously used adapter first.
    pub fn attach<A: PagerAdapter + ?Sized>(
        &mut self,
        pager: A::Pager,
        adapter: &mut A,
    ) -> Result<()> {
        self.strip.detach();
        tracing::debug!("attaching paginator");
        adapter.attach(pager, self)
    }

    /// Releases `adapter` and forgets the applied dot count.
    pub fn detach<A: PagerAdapter + ?Sized>(&mut self, adapter: &mut A) {
        adapter.detach();
        self.strip.detach();
        tracing::debug!("paginator detached");
    }
}

impl PageSink for Paginator {
    fn set_dot_count(&mut self, count: usize) {
        Self::set_dot_count(self, count);
    }

    fn on_scroll(&mut self, page: usize, offset: f64) -> Result<()> {
        Self::on_scroll(self, page, offset)
    }

    fn set_current_position(&mut self, position: usize) -> Result<()> {
        Self::set_current_position(self, position)
    }

    fn item_count(&self) -> usize {
        Self::item_count(self)
    }
}
