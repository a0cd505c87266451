//! Lazily produced child lists.
use std::fmt::{self, Debug};

use crate::{Content, InspectionError};

type Producer<'v, V> = Box<dyn Fn(usize) -> Result<Content<V>, InspectionError> + 'v>;

/// An ordered list of child contents whose elements are produced on demand.
///
/// The length is known up front while each element is only computed when
/// requested, and computing it may fail. A group is derived from a parent view
/// by [`Binding::children`] and is not cached beyond the call that asked for it.
///
/// [`Binding::children`]: crate::Binding::children
pub struct LazyGroup<'v, V> {
    len: usize,
    producer: Producer<'v, V>,
}

impl<'v, V: 'v> LazyGroup<'v, V> {
    /// Creates a group of `len` elements produced by `producer`.
    ///
    /// The producer is only called with indices below `len`.
    pub fn new(
        len: usize,
        producer: impl Fn(usize) -> Result<Content<V>, InspectionError> + 'v,
    ) -> Self {
        Self {
            len,
            producer: Box::new(producer),
        }
    }

    /// Creates a group without any elements.
    pub fn empty() -> Self {
        Self::new(0, |index| {
            Err(InspectionError::view_not_found("empty group", index))
        })
    }
}

impl<'v, V> LazyGroup<'v, V> {
    /// Number of elements in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Produces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionError::ViewNotFound`] when `index` is out of range,
    /// and whatever the producer fails with otherwise.
    pub fn element(&self, index: usize) -> Result<Content<V>, InspectionError> {
        if index >= self.len {
            return Err(InspectionError::view_not_found("lazy group", index));
        }

        (self.producer)(index)
    }
}

impl<'v, V> Debug for LazyGroup<'v, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyGroup").field("len", &self.len).finish()
    }
}
