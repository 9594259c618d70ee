// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll sources: the interfaces a pager binding uses to drive a paginator.
//!
//! A binding implements [`PagerAdapter`] for one concrete kind of scrollable
//! source and reports into a [`PageSink`]. The paginator never depends on the
//! source type; it only receives item counts, `(page, offset)` pairs, and
//! settled positions.
//!
//! [`LinearPager`] and [`LinearPagerAdapter`] provide a ready-made binding for
//! the common case of a horizontal list of equal-width pages that snaps the
//! current page to the center of its viewport.

use core::ops::Range;

use crate::util::floor_index;
use crate::{PaginatorError, Result};

/// The inbound half of a paginator, as seen by a pager binding.
pub trait PageSink {
    /// Sets the number of pages.
    fn set_dot_count(&mut self, count: usize);

    /// Reports that `page` is scrolled `offset` (within `[0, 1]`) toward the next page.
    fn on_scroll(&mut self, page: usize, offset: f64) -> Result<()>;

    /// Reports that scrolling settled on `position`.
    fn set_current_position(&mut self, position: usize) -> Result<()>;

    /// The page count last applied.
    fn item_count(&self) -> usize;
}

/// A binding between one kind of scrollable source and a [`PageSink`].
pub trait PagerAdapter {
    /// The scrollable source this adapter understands.
    type Pager;

    /// Takes over `pager` and pushes its initial state into `sink`.
    fn attach(&mut self, pager: Self::Pager, sink: &mut dyn PageSink) -> Result<()>;

    /// Releases the pager. Subsequent events are ignored until re-attached.
    fn detach(&mut self);
}

/// A horizontally scrolling list of equal-width pages.
///
/// Page `p` occupies `[page_left(p), page_left(p) + page_width)` in viewport
/// coordinates, where page `0` is centered in the viewport at scroll offset
/// `0`. Looped lists expose more virtual pages than items; virtual page `p`
/// shows item `p % item_count`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPager {
    item_count: usize,
    virtual_len: Option<usize>,
    page_width: f64,
    viewport_width: f64,
    scroll_offset: f64,
}

impl LinearPager {
    /// Creates a pager over `item_count` pages scrolled to the start.
    #[must_use]
    pub fn new(item_count: usize, page_width: f64, viewport_width: f64) -> Self {
        Self {
            item_count,
            virtual_len: None,
            page_width,
            viewport_width: viewport_width.max(0.0),
            scroll_offset: 0.0,
        }
    }

    /// Exposes `len` virtual pages cycling through the items, as a looped list does.
    #[must_use]
    pub fn with_virtual_len(mut self, len: usize) -> Self {
        self.virtual_len = Some(len);
        self
    }

    /// Number of distinct items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Changes the number of items, keeping the scroll offset in range.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Number of laid-out pages (virtual pages for a looped list).
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.item_count == 0 {
            0
        } else {
            self.virtual_len.unwrap_or(self.item_count)
        }
    }

    /// Width of one page.
    #[must_use]
    pub const fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Width of the viewport.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.page_count().saturating_sub(1) as f64 * self.page_width
    }

    /// Sets the scroll offset, clamped to `[0, max_scroll]`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll().max(0.0));
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Left edge of the centered frame a settled page occupies.
    #[must_use]
    pub fn frame_left(&self) -> f64 {
        (self.viewport_width - self.page_width) / 2.0
    }

    /// Right edge of the centered frame.
    #[must_use]
    pub fn frame_right(&self) -> f64 {
        self.frame_left() + self.page_width
    }

    /// Left edge of page `page` in viewport coordinates.
    #[must_use]
    pub fn page_left(&self, page: usize) -> f64 {
        self.frame_left() + page as f64 * self.page_width - self.scroll_offset
    }

    /// Pages that overlap the viewport.
    #[must_use]
    pub fn visible_pages(&self) -> Range<usize> {
        let count = self.page_count();
        if count == 0 || self.page_width <= 0.0 {
            return 0..0;
        }
        let mut start = floor_index((self.scroll_offset - self.frame_left()) / self.page_width)
            .min(count - 1);
        // Walk backwards in case rounding put us one page too far.
        while start > 0 && self.page_left(start - 1) + self.page_width > 0.0 {
            start -= 1;
        }
        while start < count && self.page_left(start) + self.page_width <= 0.0 {
            start += 1;
        }
        let mut end = start;
        while end < count && self.page_left(end) < self.viewport_width {
            end += 1;
        }
        start..end
    }
}

/// [`PagerAdapter`] for a [`LinearPager`].
///
/// The host forwards its list events to the `on_*` methods together with the
/// sink to update; the adapter translates pixel positions into page offsets.
#[derive(Clone, Debug, Default)]
pub struct LinearPagerAdapter {
    pager: Option<LinearPager>,
}

impl LinearPagerAdapter {
    /// Creates a detached adapter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached pager, if any.
    #[must_use]
    pub const fn pager(&self) -> Option<&LinearPager> {
        self.pager.as_ref()
    }

    /// Returns `true` while a pager is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.pager.is_some()
    }

    /// The list scrolled to `scroll_offset`.
    pub fn on_scrolled(&mut self, sink: &mut dyn PageSink, scroll_offset: f64) -> Result<()> {
        let Some(pager) = self.pager.as_mut() else {
            return Ok(());
        };
        pager.set_scroll_offset(scroll_offset);
        report_offset(pager, sink)
    }

    /// The list stopped scrolling; settle the paginator if a page is centered.
    pub fn on_scroll_idle(&mut self, sink: &mut dyn PageSink) -> Result<()> {
        let Some(pager) = self.pager.as_ref() else {
            return Ok(());
        };
        let Some(page) = settled_page(pager) else {
            return Ok(());
        };
        let count = pager.item_count();
        sink.set_dot_count(count);
        let position = wrap_position(page, count);
        if position < count {
            sink.set_current_position(position)?;
        }
        Ok(())
    }

    /// The list's items changed; `item_count` is the new count.
    pub fn on_items_changed(&mut self, sink: &mut dyn PageSink, item_count: usize) -> Result<()> {
        let Some(pager) = self.pager.as_mut() else {
            return Ok(());
        };
        pager.set_item_count(item_count);
        sink.set_dot_count(item_count);
        report_offset(pager, sink)
    }
}

impl PagerAdapter for LinearPagerAdapter {
    type Pager = LinearPager;

    fn attach(&mut self, pager: LinearPager, sink: &mut dyn PageSink) -> Result<()> {
        if !(pager.page_width() > 0.0 && pager.page_width().is_finite()) {
            return Err(PaginatorError::ZeroPageWidth);
        }
        sink.set_dot_count(pager.item_count());
        report_offset(&pager, sink)?;
        self.pager = Some(pager);
        Ok(())
    }

    fn detach(&mut self) {
        self.pager = None;
    }
}

/// Reports the page under the frame's left edge and how far it has scrolled past.
fn report_offset(pager: &LinearPager, sink: &mut dyn PageSink) -> Result<()> {
    let frame_left = pager.frame_left();
    let width = pager.page_width();
    let Some(page) = pager
        .visible_pages()
        .find(|&p| pager.page_left(p) + width > frame_left)
    else {
        return Ok(());
    };

    let count = pager.item_count();
    let position = wrap_position(page, count);
    let offset = (frame_left - pager.page_left(page)) / width;

    if (0.0..=1.0).contains(&offset) && position < count {
        sink.on_scroll(position, offset)
    } else {
        tracing::warn!(page, offset, count, "dropping out-of-range scroll report");
        Ok(())
    }
}

/// The page lying entirely inside the centered frame, if any.
fn settled_page(pager: &LinearPager) -> Option<usize> {
    let left = pager.frame_left();
    let right = pager.frame_right();
    pager.visible_pages().find(|&p| {
        let x = pager.page_left(p);
        x >= left && x + pager.page_width() <= right
    })
}

fn wrap_position(page: usize, count: usize) -> usize {
    if count != 0 && page >= count {
        page % count
    } else {
        page
    }
}
