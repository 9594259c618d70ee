// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paginator --heading-base-level=0

//! Understory Paginator: a renderer-agnostic page indicator.
//!
//! This crate turns the live scroll state of a paged list into a row of
//! "page dots": which dots are visible, how large each one is, and what color
//! it has. The selected dot and its neighbor grow and recolor smoothly as the
//! list scrolls, dots shrink as they approach the ends of the visible window,
//! and long or looped lists are shown through a fixed-size window that slides
//! with the scroll position.
//!
//! The core concepts are:
//!
//! - [`PaginatorConfig`]: resolved sizes, spacing, colors, and window size.
//! - [`Paginator`]: the controller. Hosts report item counts, scroll offsets
//!   via [`Paginator::on_scroll`], and settled positions via
//!   [`Paginator::set_current_position`]; it records [`Invalidation`]s and
//!   computes a [`DotFrame`] on demand.
//! - [`DotStrip`]: the layout engine behind the controller; owns the sliding
//!   [`Viewport`] and answers measurement queries via [`MeasureSpec`].
//! - [`compute_frame`]: the per-draw computation producing [`DotVisual`]s.
//! - [`DrawSurface`]: the one-method trait a host canvas implements.
//! - [`PagerAdapter`] / [`PageSink`]: the seam between a scrollable source and
//!   the paginator, with [`LinearPagerAdapter`] for horizontally snapping lists.
//! - [`Observable`]: explicit, synchronous subscriptions for data binding.
//!
//! This crate deliberately does **not** know about widgets or any particular UI
//! framework. Host frameworks are responsible for:
//!
//! - Resolving styling into a [`PaginatorConfig`].
//! - Forwarding scroll and data events (directly or through an adapter).
//! - Draining [`Paginator::take_invalidation`] and scheduling measure/redraw.
//! - Painting the circles handed to their [`DrawSurface`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_paginator::{Paginator, PaginatorConfig};
//!
//! let mut paginator = Paginator::new(PaginatorConfig::default()).unwrap();
//! paginator.set_dot_count(10);
//!
//! // Page 2 is halfway toward page 3.
//! paginator.on_scroll(2, 0.5).unwrap();
//! assert_eq!(paginator.scale_at(2), 0.5);
//! assert_eq!(paginator.scale_at(3), 0.5);
//!
//! // Mid-scroll, one dot is leaving the window while the next enters.
//! let frame = paginator.compute_frame();
//! assert!(!frame.is_empty() && frame.len() <= paginator.visible_dot_count());
//! assert!(frame.windows(2).all(|w| w[0].index < w[1].index));
//! ```
//!
//! ## Looped lists
//!
//! When the pager wraps around and there are more items than visible dots, the
//! strip is rendered through `visible_dot_count + 2` synthetic slots that are
//! re-centered every frame. The dot nearest the window center is the selected
//! one, so the strip appears to scroll forever.
//!
//! ```rust
//! use understory_paginator::{Paginator, PaginatorConfig};
//!
//! let config = PaginatorConfig { looped: true, ..PaginatorConfig::default() };
//! let mut paginator = Paginator::new(config).unwrap();
//! paginator.set_dot_count(100);
//! paginator.set_current_position(57).unwrap();
//!
//! assert_eq!(paginator.strip().effective_dot_count(), 7);
//! let frame = paginator.compute_frame();
//! let selected = frame.iter().find(|d| d.scale == 1.0).unwrap();
//! assert_eq!(selected.center_offset, paginator.viewport().frame_width / 2.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PaginatorConfig`] and [`Argb`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod config;
mod error;
mod measure;
mod observe;
mod paginator;
mod render;
mod scale;
mod source;
mod util;
mod viewport;

pub use color::Argb;
pub use config::PaginatorConfig;
pub use error::{ErrorKind, PaginatorError, Result};
pub use measure::MeasureSpec;
pub use observe::{ListenerId, Observable};
pub use paginator::{Invalidation, Paginator};
pub use render::{
    CENTER_SCALE_DISTANCE_FACTOR, DotFrame, DotVisual, DrawSurface, SCALE_DISTANCE_FACTOR,
    compute_frame, draw_frame,
};
pub use scale::ScaleTable;
pub use source::{LinearPager, LinearPagerAdapter, PageSink, PagerAdapter};
pub use viewport::{DotStrip, Viewport};
