// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a paginator from a simulated horizontally snapping list.
//!
//! This example shows how to:
//! - bind a `LinearPager` to a `Paginator` through `LinearPagerAdapter`,
//! - feed item-list changes through an `Observable`,
//! - drain invalidations and paint frames onto a `DrawSurface`.
//!
//! Run:
//! - `cargo run -p understory_paginator_demos --example paginator_strip`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Circle;
use understory_paginator::{
    Argb, Invalidation, LinearPager, LinearPagerAdapter, MeasureSpec, Observable, Paginator,
    PaginatorConfig, Result,
};

/// A canvas that prints every circle it is asked to paint.
struct PrintSurface;

impl understory_paginator::DrawSurface for PrintSurface {
    fn draw_circle(&mut self, circle: Circle, color: Argb) {
        println!(
            "    circle at ({:6.2}, {:5.2}) r={:5.2} color={color:?}",
            circle.center.x, circle.center.y, circle.radius
        );
    }
}

/// Host-side state: the paginator and the adapter feeding it.
struct Host {
    paginator: Paginator,
    adapter: LinearPagerAdapter,
}

impl Host {
    fn flush(&mut self, label: &str) {
        let pending = self.paginator.take_invalidation();
        if pending.is_empty() {
            println!("{label}: nothing to do");
            return;
        }
        if pending.contains(Invalidation::MEASURE) {
            let size = self.paginator.measure(MeasureSpec::Unspecified);
            println!("{label}: measured {:.1} x {:.1}", size.width, size.height);
        }
        if pending.contains(Invalidation::REDRAW) {
            println!("{label}: redraw");
            let height = self.paginator.measure(MeasureSpec::Unspecified).height;
            self.paginator.draw(&mut PrintSurface, height);
        }
    }

    fn scroll_to(&mut self, offset: f64) -> Result<()> {
        self.adapter.on_scrolled(&mut self.paginator, offset)?;
        self.flush(&format!("scroll {offset:.0}"));
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        self.adapter.on_scroll_idle(&mut self.paginator)?;
        self.flush("idle");
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    const PAGE_WIDTH: f64 = 280.0;
    const VIEWPORT_WIDTH: f64 = 320.0;

    let mut paginator = Paginator::new(PaginatorConfig::default())?;
    let mut adapter = LinearPagerAdapter::new();
    paginator.attach(
        LinearPager::new(8, PAGE_WIDTH, VIEWPORT_WIDTH),
        &mut adapter,
    )?;
    let host = Rc::new(RefCell::new(Host { paginator, adapter }));
    host.borrow_mut().flush("attach");

    // Swipe from page 0 to page 3, reporting a few intermediate positions.
    for step in 1..=6 {
        host.borrow_mut().scroll_to(f64::from(step) * PAGE_WIDTH / 2.0)?;
    }
    host.borrow_mut().settle()?;

    // The list's data lives in an observable; every change resizes the strip.
    let mut pages: Observable<Vec<&'static str>> = Observable::new();
    let target = Rc::clone(&host);
    pages.subscribe(move |list| {
        let Some(list) = list else {
            return;
        };
        let mut host = target.borrow_mut();
        let Host { paginator, adapter } = &mut *host;
        if let Err(err) = adapter.on_items_changed(paginator, list.len()) {
            tracing::warn!(%err, "item change rejected");
        }
        host.flush(&format!("{} items", list.len()));
    });
    pages.set(vec!["intro", "setup", "usage"]);
    pages.set(vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"]);

    // Switch to a looped list: many virtual pages cycle through the items.
    let mut looped = Paginator::new(PaginatorConfig {
        looped: true,
        ..PaginatorConfig::default()
    })?;
    let mut adapter = LinearPagerAdapter::new();
    looped.attach(
        LinearPager::new(12, PAGE_WIDTH, VIEWPORT_WIDTH).with_virtual_len(12 * 100),
        &mut adapter,
    )?;
    let mut host = Host {
        paginator: looped,
        adapter,
    };
    host.flush("looped attach");
    host.scroll_to(PAGE_WIDTH * 600.5)?;
    host.scroll_to(PAGE_WIDTH * 601.0)?;
    host.settle()?;

    Ok(())
}
