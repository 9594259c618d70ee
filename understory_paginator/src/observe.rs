// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-threaded observable value with explicit subscriptions.
//!
//! Hosts use this to bind list data to a paginator without a global store:
//! the data owner holds an [`Observable`], and whoever drives the paginator
//! subscribes to it. Notification is synchronous and happens on the thread
//! that calls [`Observable::set`].
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_paginator::Observable;
//!
//! let mut pages: Observable<usize> = Observable::new();
//! let seen = Rc::new(Cell::new(None));
//!
//! let sink = Rc::clone(&seen);
//! let id = pages.subscribe(move |count: Option<&usize>| sink.set(count.copied()));
//! assert_eq!(seen.get(), None);
//!
//! pages.set(12);
//! assert_eq!(seen.get(), Some(12));
//!
//! assert!(pages.unsubscribe(id));
//! pages.set(3);
//! assert_eq!(seen.get(), Some(12));
//! ```

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Handle returned by [`Observable::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(Option<&T>)>;

/// A value whose changes are pushed to subscribed listeners.
pub struct Observable<T> {
    value: Option<T>,
    next_id: u64,
    listeners: SmallVec<[(ListenerId, Listener<T>); 2]>,
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self {
            value: None,
            next_id: 0,
            listeners: SmallVec::new(),
        }
    }
}

impl<T> Observable<T> {
    /// Creates an observable with no value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observable holding `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replaces the value and notifies every listener in subscription order.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.notify();
    }

    /// Clears the value and notifies every listener with `None`.
    pub fn clear(&mut self) {
        self.value = None;
        self.notify();
    }

    /// Registers `listener` and immediately notifies it with the current value.
    pub fn subscribe<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(Option<&T>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        listener(self.value.as_ref());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes the listener registered under `id`. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let value = self.value.as_ref();
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
