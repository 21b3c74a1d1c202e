//! `PointIndex`: a strong, zero-cost handle for discovered points
//!
//! Every point discovered during orbit enumeration is assigned a dense index
//! in discovery order. `PointIndex` wraps a `u32` so indices cannot be mixed
//! up with generator labels or arbitrary integers.
//!
//! Indices are append-only: they are never reused and never reordered, so a
//! `PointIndex` obtained at any checkpoint stays valid for the lifetime of
//! the action.

use std::fmt;

/// Dense index of a discovered point, assigned in discovery order.
///
/// # Memory layout
/// `repr(transparent)`, same ABI and alignment as `u32`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointIndex(u32);

impl PointIndex {
    /// Creates a `PointIndex` from a raw `u32`.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        PointIndex(raw)
    }

    /// Returns the inner `u32` value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize`, for slot addressing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointIndex {
    #[inline]
    fn from(raw: u32) -> Self {
        PointIndex(raw)
    }
}

impl fmt::Debug for PointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointIndex").field(&self.0).finish()
    }
}

/// Prints the numeric index without any wrapper text.
impl fmt::Display for PointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
