// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{One, ToPrimitive, Zero};

use crate::conversion::IntoIndexVector;
use crate::index_vector::IndexVector;
use crate::ixvec::IxVec;
use crate::Ix;

/// An index-to-offset accessor for an *n*-dimensional grid.
///
/// `Grid` describes the valid index space of an array: along each dimension
/// the coordinates `origin <= i < origin + extent` are valid, and
/// [`offset`](Grid::offset) maps every valid coordinate tuple to a distinct
/// offset in `[0, size())`, in row-major order (last dimension varies
/// fastest).
///
/// A grid may additionally carry a *layout*: the per-dimension extent of the
/// data kept inside the grid when the grid itself is padded storage. The
/// layout participates in [`layout_size`](Grid::layout_size) and
/// [`is_padded`](Grid::is_padded) only; offsets are always computed from the
/// extent.
///
/// Grids are plain values. The builder methods and
/// [`shift_origin`](Grid::shift_origin) return new instances and leave the
/// receiver alone.
///
/// ```
/// use ndgrid::Grid;
///
/// // a 4 x 3 data region kept in a 4 x 4 allocation
/// let grid: Grid = Grid::new((4, 4)).with_layout((4, 3));
/// assert!(grid.is_padded());
/// assert_eq!(grid.size(), 16);
/// assert_eq!(grid.layout_size(), 12);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid<I = IxVec> {
    pub(crate) origin: I,
    pub(crate) extent: I,
    pub(crate) layout: Option<I>,
}

impl<I> Grid<I>
where
    I: IndexVector,
{
    /// Creates a zero-based grid with the given extent and no layout.
    ///
    /// The extent can be given as a tuple or array of per-dimension sizes,
    /// or as an existing index vector.
    ///
    /// ```
    /// use ndgrid::Grid;
    ///
    /// let grid: Grid = Grid::new((2, 3));
    /// assert_eq!(grid.ndim(), 2);
    /// assert_eq!(grid.size(), 6);
    /// assert!(grid.is_zero_based());
    /// ```
    pub fn new<E>(extent: E) -> Grid<I>
    where
        E: IntoIndexVector<Output = I>,
    {
        let extent = extent.into_index_vector();
        debug_assert!(
            extent.slice().iter().all(|&d| d >= I::Elem::zero()),
            "negative extent entry in {:?}",
            extent
        );
        let origin = I::zeros(extent.len());
        Grid {
            origin,
            extent,
            layout: None,
        }
    }

    /// Creates a grid covering the half-open range `[origin, end)` along
    /// each dimension.
    ///
    /// **Panics** if `origin` and `end` differ in length.
    ///
    /// ```
    /// use ndgrid::Grid;
    ///
    /// let grid: Grid = Grid::from_bounds((-2, 3), (1, 5));
    /// assert_eq!(grid.extent()[..], [3, 2]);
    /// ```
    pub fn from_bounds<E, F>(origin: E, end: F) -> Grid<I>
    where
        E: IntoIndexVector<Output = I>,
        F: IntoIndexVector<Output = I>,
    {
        Grid::bounded(
            origin.into_index_vector(),
            end.into_index_vector(),
            I::Elem::zero(),
        )
    }

    /// Creates a grid covering the closed range `[origin, last]` along each
    /// dimension.
    ///
    /// **Panics** if `origin` and `last` differ in length.
    pub fn from_inclusive_bounds<E, F>(origin: E, last: F) -> Grid<I>
    where
        E: IntoIndexVector<Output = I>,
        F: IntoIndexVector<Output = I>,
    {
        Grid::bounded(
            origin.into_index_vector(),
            last.into_index_vector(),
            I::Elem::one(),
        )
    }

    fn bounded(origin: I, last: I, incl: I::Elem) -> Grid<I> {
        assert_eq!(
            origin.len(),
            last.len(),
            "origin has {} entries but the bound has {}",
            origin.len(),
            last.len()
        );
        let mut extent = last;
        extent -= &origin;
        for d in extent.slice_mut() {
            *d = *d + incl;
        }
        debug_assert!(
            extent.slice().iter().all(|&d| d >= I::Elem::zero()),
            "negative extent entry in {:?}",
            extent
        );
        Grid {
            origin,
            extent,
            layout: None,
        }
    }

    /// Returns a grid with the same extent and layout and the given origin.
    ///
    /// **Panics** if `origin` and the extent differ in length.
    ///
    /// ```
    /// use ndgrid::Grid;
    ///
    /// let grid: Grid = Grid::new((2, 3)).with_origin((-1, -1));
    /// assert!(grid.is_valid_index(&[-1, 1]));
    /// assert!(!grid.is_valid_index(&[1, 1]));
    /// ```
    pub fn with_origin<E>(mut self, origin: E) -> Grid<I>
    where
        E: IntoIndexVector<Output = I>,
    {
        let origin = origin.into_index_vector();
        assert_eq!(
            origin.len(),
            self.extent.len(),
            "origin has {} entries, expected {}",
            origin.len(),
            self.extent.len()
        );
        self.origin = origin;
        self
    }

    /// Returns a grid with the data layout set to the given per-dimension
    /// extents, replacing any previous layout.
    ///
    /// **Panics** if `layout` and the extent differ in length.
    pub fn with_layout<E>(mut self, layout: E) -> Grid<I>
    where
        E: IntoIndexVector<Output = I>,
    {
        let layout = layout.into_index_vector();
        assert_eq!(
            layout.len(),
            self.extent.len(),
            "layout has {} entries, expected {}",
            layout.len(),
            self.extent.len()
        );
        self.layout = Some(layout);
        self
    }

    /// Returns the number of dimensions (number of axes).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.extent.len()
    }

    /// Returns the number of elements in the valid index space.
    pub fn size(&self) -> Ix {
        self.extent.product()
    }

    /// Computes the number of elements while checking for overflow.
    pub fn size_checked(&self) -> Option<Ix> {
        self.extent.product_checked()
    }

    /// Returns the coordinate of the first valid element along each
    /// dimension.
    #[inline]
    pub fn origin(&self) -> &I {
        &self.origin
    }

    /// Returns the number of valid elements along each dimension.
    #[inline]
    pub fn extent(&self) -> &I {
        &self.extent
    }

    /// Returns the data layout, if one is set.
    #[inline]
    pub fn layout(&self) -> Option<&I> {
        self.layout.as_ref()
    }

    /// Returns the exclusive upper bound of the valid index space,
    /// `origin + extent` along each dimension.
    pub fn end(&self) -> I {
        let mut end = self.origin.clone();
        end += &self.extent;
        end
    }

    /// Returns the last valid coordinate along each dimension,
    /// `origin + extent - 1`.
    pub fn last(&self) -> I {
        let mut last = self.end();
        for x in last.slice_mut() {
            *x = *x - I::Elem::one();
        }
        last
    }

    /// Returns the number of elements the physical storage holds.
    ///
    /// Equals [`size`](Grid::size) when no layout is set; otherwise the
    /// product of the layout as seen from the zero-based grid.
    pub fn layout_size(&self) -> Ix {
        match self.shift_origin().layout {
            Some(layout) => layout.product(),
            None => self.size(),
        }
    }

    /// Returns true if every entry of the origin is zero.
    pub fn is_zero_based(&self) -> bool {
        self.origin.slice().iter().all(|x| x.is_zero())
    }

    /// Returns true if the grid extends past its data layout somewhere.
    ///
    /// A grid without a layout is never padded.
    ///
    /// **Panics** if the layout does not fit inside the grid, that is if
    /// `end() >= layout` fails in some dimension.
    pub fn is_padded(&self) -> bool {
        match self.layout {
            None => false,
            Some(ref layout) => {
                assert_eq!(
                    self.extent.len(),
                    layout.len(),
                    "layout has {} entries, expected {}",
                    layout.len(),
                    self.extent.len()
                );
                let end = self.end();
                assert!(
                    end.all_ge(layout),
                    "layout {:?} extends past the end of the grid {:?}",
                    layout,
                    end
                );
                !end.all_eq(layout)
            }
        }
    }

    /// Returns an equivalent grid with the origin moved to zero.
    ///
    /// The extent is unchanged; a layout, when present, is translated into
    /// the zero-based frame. A grid that is already zero-based comes back
    /// as an equal copy.
    pub fn shift_origin(&self) -> Grid<I> {
        if self.is_zero_based() {
            return self.clone();
        }
        let layout = self.layout.as_ref().map(|layout| {
            debug_assert_eq!(layout.len(), self.origin.len());
            let mut shifted = layout.clone();
            shifted -= &self.origin;
            shifted
        });
        Grid {
            origin: I::zeros(self.ndim()),
            extent: self.extent.clone(),
            layout,
        }
    }

    /// Computes the flat storage offset of a valid coordinate tuple.
    ///
    /// Offsets are row-major: the last dimension varies fastest, and the
    /// valid index space maps one-to-one onto `[0, size())`. The layout
    /// does not participate; padding affects allocation size only, never
    /// addressing.
    ///
    /// The index must be valid for the grid (debug-asserted).
    #[inline]
    pub fn offset(&self, index: &[I::Elem]) -> Ix {
        debug_assert!(
            self.is_valid_index(index),
            "index {:?} is not valid for a grid with origin {:?} and extent {:?}",
            index,
            self.origin,
            self.extent
        );
        let origin = self.origin.slice();
        let extent = self.extent.slice();
        let mut offset = I::Elem::zero();
        for j in 0..self.ndim() {
            if j > 0 {
                offset = offset * extent[j];
            }
            offset = offset + (index[j] - origin[j]);
        }
        offset.to_usize().expect("offset does not fit in usize")
    }

    /// Returns true if `index` lies inside the valid index space.
    ///
    /// An index of the wrong length is invalid, not an error.
    pub fn is_valid_index(&self, index: &[I::Elem]) -> bool {
        if index.len() != self.ndim() {
            return false;
        }
        let origin = self.origin.slice();
        let extent = self.extent.slice();
        for j in 0..self.ndim() {
            if index[j] < origin[j] || index[j] >= origin[j] + extent[j] {
                return false;
            }
        }
        true
    }
}
