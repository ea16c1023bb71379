//! `BrandedVec` - a fixed set of token-gated elements in one contiguous buffer.
//!
//! This is the "branded vector" pattern from the GhostCell paper: many
//! independently mutable elements, one linear token gating every borrow.
//!
//! Design:
//! - The container owns a `Vec<GhostCell<'brand, T>>`, sized once at
//!   construction. Graph vertex state never grows or shrinks, so there is no
//!   `push`/`remove` surface.
//! - Shared access: `&GhostToken<'brand>` → `&T` / `&[T]`.
//! - Exclusive access: `&mut GhostToken<'brand>` → `&mut [T]`, or a bulk fill.

use core::slice;

use crate::{GhostCell, GhostToken};

/// A fixed-length vector of token-gated elements.
pub struct BrandedVec<'brand, T> {
    inner: Vec<GhostCell<'brand, T>>,
}

impl<'brand, T> BrandedVec<'brand, T> {
    /// Builds `len` elements, calling `f(i)` for each index.
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Self {
        Self {
            inner: (0..len).map(|i| GhostCell::new(f(i))).collect(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Token-gated shared reference to element `idx`.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, token: &'a GhostToken<'brand>, idx: usize) -> &'a T {
        self.inner[idx].borrow(token)
    }

    /// All elements as a shared slice.
    #[inline(always)]
    pub fn as_slice<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a [T] {
        // SAFETY: `GhostCell<T>` is `repr(transparent)` over `UnsafeCell<T>`, which
        // has the layout of `T`. The shared token rules out any live `&mut T`.
        unsafe { slice::from_raw_parts(self.inner.as_ptr().cast::<T>(), self.inner.len()) }
    }

    /// All elements as an exclusive slice.
    ///
    /// Traversals take this once and work on plain `&mut [T]` for the whole run;
    /// the token stays mutably borrowed until the slice is dropped.
    #[inline(always)]
    pub fn as_mut_slice<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut [T] {
        // SAFETY: same layout argument as `as_slice`. `&mut GhostToken<'brand>`
        // proves exclusivity over every cell of this brand for `'a`, and `&self`
        // keeps the buffer from reallocating.
        unsafe {
            slice::from_raw_parts_mut(self.inner.as_ptr().cast::<T>().cast_mut(), self.inner.len())
        }
    }

    /// Iterates over all elements by shared reference.
    pub fn iter<'a>(&'a self, token: &'a GhostToken<'brand>) -> slice::Iter<'a, T> {
        self.as_slice(token).iter()
    }

    /// Overwrites every element with a fresh value from `f`.
    pub fn fill_with(&self, token: &mut GhostToken<'brand>, mut f: impl FnMut() -> T) {
        for cell in &self.inner {
            *cell.borrow_mut(token) = f();
        }
    }
}

impl<'brand, T: Clone> BrandedVec<'brand, T> {
    /// Copies every element out into an unbranded `Vec`.
    pub fn to_vec(&self, token: &GhostToken<'brand>) -> Vec<T> {
        self.as_slice(token).to_vec()
    }
}
