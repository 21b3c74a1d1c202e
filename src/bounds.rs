//! Capability bounds for points, elements, and action sides.
//!
//! The engine is generic over an opaque point type, an opaque element type,
//! and a [`Side`] marker fixing the composition order used when multipliers
//! are reconstructed from generator-labeled paths. Concrete algebraic types
//! live outside this crate; anything satisfying these traits plugs in.

use std::fmt::Debug;
use std::hash::Hash;

/// Canonical bound set for orbit points.
///
/// Rationale:
/// - `Clone` because the store owns points and `apply` produces fresh ones
/// - `Eq + Hash` for the deduplicating point registry
/// - `Debug` for diagnostics and invariant checks
///
/// `degree` reports the point's shape when it has one; `None` opts out of
/// shape checking against the generator degree.
pub trait PointLike: Clone + Eq + Hash + Debug {
    /// Shape of the point, if meaningful for the domain.
    fn degree(&self) -> Option<usize> {
        None
    }
}

impl PointLike for u32 {}
impl PointLike for u64 {}
impl PointLike for usize {}

/// Minimal algebraic capability set for generating elements.
pub trait Element: Clone + PartialEq + Debug {
    /// Shape of the element; all generators of one action must agree.
    fn degree(&self) -> usize;

    /// The identity element of the same shape as `self`.
    fn identity(&self) -> Self;

    /// The product `self * other`.
    fn product(&self, other: &Self) -> Self;
}

/// Elements that act on points of type `P`.
pub trait ActOn<P>: Element {
    /// The image of `point` under `self`.
    fn act(&self, point: &P) -> P;
}

/// Marker trait fixing the multiplier composition order.
///
/// `compose(acc, next)` folds a path's generator labels in application order:
/// `acc` is the element applied first, `next` the one applied after it. A
/// right action satisfies `p . (a b) = (p . a) . b`, a left action
/// `(b a) . p = b . (a . p)`, so the two sides fold in opposite orders.
pub trait Side: Copy + Debug + private::Sealed {
    /// Compose `acc` (applied first) with `next` (applied second).
    fn compose<E: Element>(acc: &E, next: &E) -> E;
}

/// Right action marker: points are acted on from the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Right;

/// Left action marker: points are acted on from the left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Left;

impl Side for Right {
    #[inline]
    fn compose<E: Element>(acc: &E, next: &E) -> E {
        acc.product(next)
    }
}

impl Side for Left {
    #[inline]
    fn compose<E: Element>(acc: &E, next: &E) -> E {
        next.product(acc)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Right {}
    impl Sealed for super::Left {}
}
