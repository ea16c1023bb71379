use core::marker::PhantomData;

/// A marker that is invariant in `'id`.
///
/// Without invariance the compiler could shrink two brands to a common
/// lifetime and let one graph's token open another graph's state.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
