use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use super::structural_children;
use crate::{Binding, Content, InspectionError, LazyGroup, Node, Position, Resolution};

/// Single pass over the children of a node, in tree order.
///
/// The children are enumerated once, when the iterator is created. Every step
/// is best effort: a child that fails to be produced is replaced by an absent
/// node, and a child that fails to be wrapped is skipped without ending the
/// pass. Use [`Children::advance`] to observe skipped steps.
pub struct Children<'n, B: Binding + ?Sized> {
    group: LazyGroup<'n, B::View>,
    parent: &'n Node<'n, B>,
    /// Position fetched by the next step, one past the cursor.
    next: usize,
}

/// Outcome of a single [`Children::advance`].
pub enum Step<'n, B: Binding + ?Sized> {
    /// The child at the current position.
    Node(Node<'n, B>),
    /// The child at `index` could not be wrapped.
    Skipped {
        index: usize,
        error: InspectionError,
    },
    /// There are no more children.
    Exhausted,
}

impl<'n, B: Binding + ?Sized> Children<'n, B> {
    pub(crate) fn new(parent: &'n Node<'n, B>) -> Self {
        Self {
            group: structural_children(parent.binding(), parent.content()),
            parent,
            next: 0,
        }
    }

    /// Moves to the next child.
    ///
    /// Once [`Step::Exhausted`] has been returned every further call returns it
    /// again.
    pub fn advance(&mut self) -> Step<'n, B> {
        if self.next >= self.group.len() {
            return Step::Exhausted;
        }

        let index = self.next;
        self.next += 1;

        let content = match Resolution::from_result(self.group.element(index)) {
            Resolution::Found(content) => content,
            Resolution::Absent => {
                tracing::trace!(index, "child not found, substituting absent view");
                Content::absent()
            }
            Resolution::Fatal(error) => {
                tracing::trace!(index, %error, "substituting absent view");
                Content::absent()
            }
        };

        match Node::new(content, self.parent, Position::Index(index)) {
            Ok(node) => Step::Node(node),
            Err(error) => {
                tracing::debug!(
                    index,
                    path = %self.parent.path(),
                    %error,
                    "skipping child that could not be wrapped"
                );
                Step::Skipped { index, error }
            }
        }
    }

    /// Number of children enumerated when the pass started.
    #[inline]
    pub fn total(&self) -> usize {
        self.group.len()
    }

    /// Number of steps left before the pass is exhausted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.group.len() - self.next
    }
}

impl<'n, B: Binding + ?Sized> Iterator for Children<'n, B> {
    type Item = Node<'n, B>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.advance() {
                Step::Node(node) => return Some(node),
                Step::Skipped { .. } => continue,
                Step::Exhausted => return None,
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<'n, B: Binding + ?Sized> FusedIterator for Children<'n, B> {}

impl<'n, B: Binding + ?Sized> Debug for Children<'n, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("group", &self.group)
            .field("next", &self.next)
            .finish()
    }
}

impl<'n, B: Binding + ?Sized> Step<'n, B> {
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    /// Converts into the produced node, if any.
    #[inline]
    pub fn into_node(self) -> Option<Node<'n, B>> {
        match self {
            Step::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl<'n, B: Binding + ?Sized> Debug for Step<'n, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Step::Skipped { index, error } => f
                .debug_struct("Skipped")
                .field("index", index)
                .field("error", error)
                .finish(),
            Step::Exhausted => f.write_str("Exhausted"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NotAComposite;

    /// A composite of `len` children, where `failing` can not be produced and
    /// `rejected` can not be wrapped.
    struct Row {
        failing: Option<usize>,
        rejected: Option<usize>,
    }

    impl Binding for Row {
        type View = usize;

        fn children<'v>(&'v self, view: &'v usize) -> Result<LazyGroup<'v, usize>, NotAComposite> {
            if *view != 0 {
                return Err(NotAComposite::new(view.to_string()));
            }

            Ok(LazyGroup::new(4, move |index| {
                if Some(index) == self.failing {
                    Err(InspectionError::construction("lost"))
                } else {
                    Ok(Content::View(index + 1))
                }
            }))
        }

        fn accept(
            &self,
            view: &usize,
            _parent: &Node<'_, Self>,
            _position: &Position,
        ) -> Result<(), InspectionError> {
            if Some(*view - 1) == self.rejected {
                Err(InspectionError::construction("rejected"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn visits_all_children() {
        let binding = Row {
            failing: None,
            rejected: None,
        };
        let root = Node::root(&binding, 0);
        let views: Vec<_> = root.children().map(|node| *node.view().unwrap()).collect();
        assert_eq!(views, [1, 2, 3, 4]);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let binding = Row {
            failing: None,
            rejected: None,
        };
        let root = Node::root(&binding, 0);
        let mut children = root.children();
        assert_eq!(children.by_ref().count(), 4);
        assert_eq!(children.remaining(), 0);
        assert!(children.advance().is_exhausted());
        assert!(children.advance().is_exhausted());
        assert!(children.next().is_none());
    }

    #[test]
    fn failed_fetch_becomes_absent() {
        let binding = Row {
            failing: Some(1),
            rejected: None,
        };
        let root = Node::root(&binding, 0);
        let absent: Vec<_> = root.children().map(|node| node.is_absent()).collect();
        assert_eq!(absent, [false, true, false, false]);
    }

    #[test]
    fn failed_wrap_is_skipped() {
        let binding = Row {
            failing: None,
            rejected: Some(2),
        };
        let root = Node::root(&binding, 0);
        let mut children = root.children();

        assert_eq!(children.advance().into_node().unwrap().index(), Some(0));
        assert_eq!(children.advance().into_node().unwrap().index(), Some(1));
        match children.advance() {
            Step::Skipped { index, error } => {
                assert_eq!(index, 2);
                assert_eq!(error, InspectionError::construction("rejected"));
            }
            step => panic!("unexpected step {step:?}"),
        }
        assert_eq!(children.advance().into_node().unwrap().index(), Some(3));
        assert!(children.advance().is_exhausted());

        let views: Vec<_> = root.children().map(|node| *node.view().unwrap()).collect();
        assert_eq!(views, [1, 2, 4]);
    }

    #[test]
    fn leaf_has_no_children() {
        let binding = Row {
            failing: None,
            rejected: None,
        };
        let root = Node::root(&binding, 5);
        let mut children = root.children();
        assert_eq!(children.total(), 0);
        assert!(children.advance().is_exhausted());
    }
}
