// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors and channel-wise interpolation.

use core::fmt;

/// A straight (non-premultiplied) 8-bit-per-channel color packed as `0xAARRGGBB`.
///
/// This mirrors the integer color representation most host toolkits hand out,
/// so resolved style values can be passed through without conversion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Builds a color from individual channels.
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Wraps a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Linearly interpolates every channel (alpha included) from `self` toward `to`.
    ///
    /// `t` is clamped to `[0, 1]`; `0` yields `self` and `1` yields `to`.
    /// Each channel is rounded half up, so a midpoint between `0` and `255`
    /// resolves to `128` regardless of direction.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self::from_argb(
            lerp_channel(self.alpha(), to.alpha(), t),
            lerp_channel(self.red(), to.red(), t),
            lerp_channel(self.green(), to.green(), t),
            lerp_channel(self.blue(), to.blue(), t),
        )
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to [0.5, 255.5) before the cast, and truncation of a positive value is floor"
)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    let v = from + (to - from) * t + 0.5;
    v.clamp(0.5, 255.5 - f64::EPSILON * 256.0) as u8
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::Argb;

    #[test]
    fn channels_round_trip_through_packing() {
        let c = Argb::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_u32(), 0x1234_5678);
        assert_eq!(
            (c.alpha(), c.red(), c.green(), c.blue()),
            (0x12, 0x34, 0x56, 0x78)
        );
    }

    #[test]
    fn midpoint_rounds_half_up() {
        let mid = Argb::BLACK.lerp(Argb::WHITE, 0.5);
        assert_eq!(mid, Argb::from_argb(255, 128, 128, 128));

        // Descending channels land on the same midpoint.
        let mid = Argb::WHITE.lerp(Argb::BLACK, 0.5);
        assert_eq!(mid, Argb::from_argb(255, 128, 128, 128));
    }

    #[test]
    fn endpoints_are_exact() {
        let a = Argb::from_u32(0x8011_2233);
        let b = Argb::from_u32(0xFFAA_BBCC);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn alpha_is_interpolated_too() {
        let from = Argb::from_argb(0, 255, 255, 255);
        let to = Argb::from_argb(255, 255, 255, 255);
        assert_eq!(from.lerp(to, 0.25).alpha(), 64);
    }

    #[test]
    fn out_of_range_factor_is_clamped() {
        assert_eq!(Argb::BLACK.lerp(Argb::WHITE, 2.0), Argb::WHITE);
        assert_eq!(Argb::BLACK.lerp(Argb::WHITE, -1.0), Argb::BLACK);
    }
}
