use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::Ix;

/// An ordered sequence of signed indices.
///
/// This trait is the seam between [`Grid`](crate::Grid) and the concrete
/// representation of its origin, extent and layout sequences: construction,
/// elementwise arithmetic and comparison, append, and a product reduction.
/// [`IxVec`](crate::IxVec) is the inline, fixed-capacity implementation used
/// by default; an implementation backed by a different integer type or
/// capacity can be substituted through the `I` type parameter of `Grid`.
pub trait IndexVector:
    Clone
    + Eq
    + Debug
    + Default
    + Add<Self, Output = Self>
    + AddAssign
    + for<'x> AddAssign<&'x Self>
    + Sub<Self, Output = Self>
    + SubAssign
    + for<'x> SubAssign<&'x Self>
{
    /// Element type of the sequence.
    type Elem: PrimInt + Signed + Debug;

    /// Creates a sequence of `n` zeros.
    fn zeros(n: usize) -> Self;

    /// Creates a sequence with the same elements as `slice`.
    fn copy_from(slice: &[Self::Elem]) -> Self;

    #[doc(hidden)]
    fn slice(&self) -> &[Self::Elem];

    #[doc(hidden)]
    fn slice_mut(&mut self) -> &mut [Self::Elem];

    /// Appends `elem` at the end of the sequence.
    fn push(&mut self, elem: Self::Elem);

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize {
        self.slice().len()
    }

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `self` and `rhs` have the same length and are
    /// elementwise equal.
    fn all_eq(&self, rhs: &Self) -> bool {
        self.slice() == rhs.slice()
    }

    /// Returns true if `self` and `rhs` have the same length and every
    /// element of `self` is greater than or equal to its counterpart.
    fn all_ge(&self, rhs: &Self) -> bool {
        self.len() == rhs.len()
            && self
                .slice()
                .iter()
                .zip(rhs.slice())
                .all(|(x, y)| x >= y)
    }

    /// Computes the product of the elements as a size.
    ///
    /// The empty product is 1.
    ///
    /// **Panics** if an element is negative.
    fn product(&self) -> Ix {
        self.slice().iter().fold(1, |s, &a| {
            s * a
                .to_usize()
                .expect("product of a sequence with a negative element")
        })
    }

    /// Computes the product of the elements while checking for overflow.
    ///
    /// Returns `None` on overflow or if an element is negative.
    fn product_checked(&self) -> Option<Ix> {
        self.slice()
            .iter()
            .try_fold(1_usize, |s, &a| s.checked_mul(a.to_usize()?))
    }
}
