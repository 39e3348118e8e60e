// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! The `ndgrid` crate provides [`Grid`], an index-to-offset accessor for
//! *n*-dimensional arrays stored in flat, contiguous buffers.
//!
//! A `Grid` holds a per-dimension *origin* and *extent* and maps logical
//! coordinates to row-major storage offsets. Unlike a plain shape, the
//! origin of each dimension is an arbitrary signed integer, so a grid can
//! describe ranges like `[-2, 3)` along an axis. A grid can also carry an
//! optional *layout* recording the data extent inside padded storage, as
//! needed by in-place real-to-complex transforms and similar algorithms
//! that over-allocate along the fastest dimension.
//!
//! ## Highlights
//!
//! - Value semantics throughout; a grid owns three small inline sequences
//!   and never allocates.
//! - Coordinates are held in [`IxVec`], a fixed-capacity vector of up to
//!   [`MAX_NDIM`] signed indices. The accessor is generic over the
//!   representation via the [`IndexVector`] trait.
//! - All queries are pure and `O(ndim)`; a shared grid can be read from
//!   many threads without synchronization.
//! - Precondition violations (mismatched sequence lengths, inconsistent
//!   padding) are defects in the calling code and panic; there is no
//!   recoverable error path.
//!
//! ```
//! use ndgrid::Grid;
//!
//! let grid: Grid = Grid::from_bounds((-2, 0), (1, 4));
//! assert_eq!(grid.ndim(), 2);
//! assert_eq!(grid.size(), 12);
//! assert_eq!(grid.offset(&[-2, 0]), 0);
//! assert_eq!(grid.offset(&[0, 3]), 11);
//! assert!(!grid.is_valid_index(&[1, 0]));
//! ```
//!
//! ## Crate feature flags
//!
//! - `std`: Rust standard library (enabled by default).
//! - `serde`: serialization support for [`IxVec`] and [`Grid`].

#[cfg(not(feature = "std"))]
extern crate core as std;

pub use crate::conversion::IntoIndexVector;
pub use crate::grid::Grid;
pub use crate::index_vector::IndexVector;
pub use crate::ixvec::IxVec;

mod conversion;
mod grid;
#[cfg(feature = "serde")]
mod grid_serde;
mod index_vector;
mod ixvec;

/// Array index type.
pub type Ix = usize;
/// Array index type (signed).
pub type Ixs = isize;

/// The maximum number of dimensions an [`IxVec`] can hold.
pub const MAX_NDIM: usize = 10;
