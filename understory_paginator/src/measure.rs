// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host measurement constraints.

/// A constraint the host places on one axis during measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The host dictates the exact size.
    Exactly(f64),
    /// The size may be anything up to the bound.
    AtMost(f64),
    /// No constraint; use the preferred size.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves this constraint against the preferred size.
    #[must_use]
    pub fn resolve(self, preferred: f64) -> f64 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(bound) => preferred.min(bound),
            Self::Unspecified => preferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasureSpec;

    #[test]
    fn resolve_follows_constraint_mode() {
        assert_eq!(MeasureSpec::Exactly(40.0).resolve(10.0), 40.0);
        assert_eq!(MeasureSpec::AtMost(8.0).resolve(10.0), 8.0);
        assert_eq!(MeasureSpec::AtMost(20.0).resolve(10.0), 10.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(10.0), 10.0);
    }
}
