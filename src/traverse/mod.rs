//! Traversal over the children of a node.
//!
//! Children can be visited in two ways that share nothing but the child
//! enumeration of the [`Binding`]:
//!
//!  - [`Children`] is a single pass that enumerates the children once and
//!    tolerates any failure by degrading or skipping individual elements.
//!  - [`Elements`] provides stateless positional access that re-enumerates the
//!    children on every call.
//!
//! Both assume that the inspected tree is not mutated while they are in use.
mod children;
mod elements;

pub use children::{Children, Step};
pub use elements::{Elements, ElementsIter};

use crate::{Binding, Content, LazyGroup};

/// Enumerates the structural children of `content`.
///
/// Absent content and views that are not composites have no children.
pub fn structural_children<'v, B: Binding + ?Sized>(
    binding: &'v B,
    content: &'v Content<B::View>,
) -> LazyGroup<'v, B::View> {
    let Content::View(view) = content else {
        return LazyGroup::empty();
    };

    match binding.children(view) {
        Ok(group) => group,
        Err(error) => {
            tracing::trace!(%error, "treating view as having no children");
            LazyGroup::empty()
        }
    }
}

/// Number of structural children of `content`.
#[inline]
pub fn child_count<B: Binding + ?Sized>(binding: &B, content: &Content<B::View>) -> usize {
    structural_children(binding, content).len()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NotAComposite;

    struct Counts;

    impl Binding for Counts {
        type View = usize;

        fn children<'v>(&'v self, view: &'v usize) -> Result<LazyGroup<'v, usize>, NotAComposite> {
            match *view {
                0 => Err(NotAComposite::new("leaf")),
                len => Ok(LazyGroup::new(len, |index| Ok(Content::View(index)))),
            }
        }
    }

    #[test]
    fn counts() {
        assert_eq!(child_count(&Counts, &Content::View(4)), 4);
        assert_eq!(child_count(&Counts, &Content::View(0)), 0);
        assert_eq!(child_count(&Counts, &Content::Absent), 0);
    }

    #[test]
    fn enumerates_in_order() {
        let content = Content::View(3);
        let group = structural_children(&Counts, &content);
        let elements: Vec<_> = (0..group.len()).map(|i| group.element(i)).collect();
        assert_eq!(
            elements,
            [Ok(Content::View(0)), Ok(Content::View(1)), Ok(Content::View(2))]
        );
    }
}
