//! `GhostCell` - interior mutability gated by a branded token.
//!
//! ## Safety invariant
//!
//! For a fixed brand `'brand`, every safe method that yields `&mut T` takes
//! `&mut GhostToken<'brand>`. The token is linear, so safe code can never hold
//! two overlapping mutable borrows of the same cell, nor a mutable borrow next
//! to a shared one.

use core::{cell::UnsafeCell, marker::PhantomData};

use crate::GhostToken;

/// A token-branded wrapper around `UnsafeCell<T>`.
///
/// `repr(transparent)` keeps `GhostCell<'_, T>` layout-identical to `T`, which
/// [`BrandedVec`](crate::collections::BrandedVec) relies on to hand out slices.
#[repr(transparent)]
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: PhantomData<&'brand mut ()>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new cell.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: PhantomData,
            value: UnsafeCell::new(value),
        }
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: safe code cannot obtain `&mut T` without `&mut GhostToken<'brand>`,
        // and that borrow cannot coexist with the `&GhostToken` held here.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: `&mut GhostToken<'brand>` proves no other borrow of any cell of
        // this brand is live for `'a`.
        unsafe { &mut *self.value.get() }
    }
}

// SAFETY: moving the cell does not grant access to the interior; access still
// requires the branded token.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}

// SAFETY: the only shared access yields `&T`, which is thread-safe iff `T: Sync`.
// Mutation needs `&mut GhostToken<'brand>`, which cannot be shared.
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
