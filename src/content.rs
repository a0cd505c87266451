//! Payload of a single node in the inspected view tree.

/// The opaque payload of one view-tree node, or the absent sentinel.
///
/// `V` is whatever the [`Binding`] uses to represent views. The core never
/// looks inside it; it only distinguishes real views from [`Content::Absent`].
///
/// [`Binding`]: crate::Binding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content<V> {
    /// A real view.
    View(V),
    /// Placeholder standing in for a child that could not be found.
    Absent,
}

impl<V> Content<V> {
    /// Returns the absent sentinel.
    #[inline]
    pub const fn absent() -> Self {
        Content::Absent
    }

    /// Whether this is the absent sentinel.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Content::Absent)
    }

    /// Borrows the view, if this is not the absent sentinel.
    #[inline]
    pub fn view(&self) -> Option<&V> {
        match self {
            Content::View(view) => Some(view),
            Content::Absent => None,
        }
    }
}

impl<V> Default for Content<V> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<V> From<V> for Content<V> {
    #[inline]
    fn from(view: V) -> Self {
        Content::View(view)
    }
}
