// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for paginator operations.

/// Convenience result type used across this crate.
pub type Result<T, E = PaginatorError> = core::result::Result<T, E>;

/// Coarse classification of a [`PaginatorError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value was outside the domain the operation accepts.
    InvalidArgument,
    /// A page or position was outside `0..item_count`.
    IndexOutOfRange,
}

/// Errors surfaced synchronously by inbound paginator calls.
///
/// Invalid input is never silently clamped; callers get one of these instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PaginatorError {
    /// A scroll offset was outside `[0, 1]` (or NaN).
    #[error("offset must be within [0, 1], got {offset}")]
    OffsetOutOfRange {
        /// The rejected offset.
        offset: f64,
    },

    /// The visible dot count must be odd so that one dot sits in the middle.
    #[error("visible dot count must be odd, got {count}")]
    EvenVisibleDotCount {
        /// The rejected count.
        count: usize,
    },

    /// The visible dot count is too large to add the two looped overflow slots.
    #[error("visible dot count {count} leaves no room for the looped overflow slots")]
    VisibleDotCountOverflow {
        /// The rejected count.
        count: usize,
    },

    /// The minimum dot count must allow at least two dots before drawing.
    #[error("minimum dot count must be at least 2, got {count}")]
    MinDotCountTooSmall {
        /// The rejected count.
        count: usize,
    },

    /// Dot sizes or spacing cannot produce a usable strip.
    #[error("invalid dot geometry: {reason}")]
    InvalidGeometry {
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// A pager reported pages with no width, so offsets cannot be derived.
    #[error("pager page width must be positive")]
    ZeroPageWidth,

    /// A page or position was outside `0..len`.
    #[error("index {index} out of bounds for {len} dots")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The current item count.
        len: usize,
    },
}

impl PaginatorError {
    /// Returns the coarse [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OffsetOutOfRange { .. }
            | Self::EvenVisibleDotCount { .. }
            | Self::VisibleDotCountOverflow { .. }
            | Self::MinDotCountTooSmall { .. }
            | Self::InvalidGeometry { .. }
            | Self::ZeroPageWidth => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::{ErrorKind, PaginatorError};

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            PaginatorError::OffsetOutOfRange { offset: 1.5 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PaginatorError::EvenVisibleDotCount { count: 4 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PaginatorError::MinDotCountTooSmall { count: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(PaginatorError::ZeroPageWidth.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            PaginatorError::IndexOutOfRange { index: 3, len: 3 }.kind(),
            ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn display_names_the_offending_value() {
        let msg = PaginatorError::EvenVisibleDotCount { count: 4 }.to_string();
        assert!(msg.contains("odd"), "unexpected message: {msg}");
        assert!(msg.contains('4'), "unexpected message: {msg}");

        let msg = PaginatorError::IndexOutOfRange { index: 7, len: 5 }.to_string();
        assert_eq!(msg, "index 7 out of bounds for 5 dots");
    }
}
