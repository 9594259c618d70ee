// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Truncates a ratio to an index, mapping negative and NaN ratios to `0`.
///
/// For non-negative input this is `floor`, without needing `std` or `libm`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Only positive ratios reach the cast; values past usize::MAX saturate"
)]
#[inline]
pub(crate) fn floor_index(ratio: f64) -> usize {
    if ratio > 0.0 { ratio as usize } else { 0 }
}
