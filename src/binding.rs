//! Interface to the view framework being inspected.
use std::fmt::Debug;

use crate::{InspectionError, LazyGroup, Node, NotAComposite, Position};

/// Connects the traversal core to a concrete view framework.
///
/// The binding knows how views are represented, how to enumerate the
/// structural children of a composite, and which views can be wrapped into a
/// [`Node`] at a given place in the tree. It must not mutate the tree while a
/// traversal is in progress; no locking is done on its behalf.
pub trait Binding {
    /// The opaque view payload carried by [`Content`](crate::Content).
    type View: Debug;

    /// Enumerates the structural children of `view` in tree order.
    ///
    /// # Errors
    ///
    /// Returns [`NotAComposite`] when `view` has no structural children, e.g.
    /// because it is a leaf.
    fn children<'v>(&'v self, view: &'v Self::View)
        -> Result<LazyGroup<'v, Self::View>, NotAComposite>;

    /// Checks that `view` can be wrapped as a child of `parent` at `position`.
    ///
    /// Called by [`Node::new`] for every real view. The absent sentinel is
    /// never passed here.
    ///
    /// # Errors
    ///
    /// [`InspectionError::ViewNotFound`] when the view turns out to be missing
    /// at that position, or any other error when it can not be wrapped.
    #[allow(unused_variables)]
    fn accept(
        &self,
        view: &Self::View,
        parent: &Node<'_, Self>,
        position: &Position,
    ) -> Result<(), InspectionError> {
        Ok(())
    }

    /// Short human readable description of `view` used in paths and errors.
    fn describe(&self, view: &Self::View) -> String {
        format!("{view:?}")
    }
}
