use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use bitvec::vec::BitVec;

use super::child_count;
use crate::{Binding, Node, Resolution};

/// Random access to the children of a node by position.
///
/// Holds no state besides the parent: the bounds and every element are
/// recomputed from the parent's content on each call. Indices are plain
/// `usize` positions in `start_index()..end_index()`.
pub struct Elements<'n, B: Binding + ?Sized> {
    parent: &'n Node<'n, B>,
}

impl<'n, B: Binding + ?Sized> Elements<'n, B> {
    pub(crate) fn new(parent: &'n Node<'n, B>) -> Self {
        Self { parent }
    }

    #[inline]
    pub fn start_index(&self) -> usize {
        0
    }

    #[inline]
    pub fn end_index(&self) -> usize {
        self.len()
    }

    /// Number of children. Recomputed on every call.
    #[inline]
    pub fn len(&self) -> usize {
        child_count(self.parent.binding(), self.parent.content())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The position following `index`. Not bounds checked.
    #[inline]
    pub fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    /// The position preceding `index`. Not bounds checked, wraps around below
    /// zero like [`Elements::index_offset`].
    #[inline]
    pub fn index_before(&self, index: usize) -> usize {
        index.wrapping_sub(1)
    }

    /// The position `offset` steps away from `index`. Not bounds checked.
    #[inline]
    pub fn index_offset(&self, index: usize, offset: isize) -> usize {
        index.wrapping_add_signed(offset)
    }

    /// Number of steps from `start` to `end`.
    #[inline]
    pub fn distance(&self, start: usize, end: usize) -> isize {
        end as isize - start as isize
    }

    /// The child at `index`.
    ///
    /// A child that is reported as missing is returned as an absent node
    /// recorded with `index`.
    ///
    /// # Panics
    ///
    /// Panics when producing or wrapping the child fails for any other reason.
    /// For indices in `start_index()..end_index()` this means the binding
    /// broke its contract.
    pub fn at(&self, index: usize) -> Node<'n, B> {
        match Resolution::from_result(self.parent.child(index)) {
            Resolution::Found(node) => node,
            Resolution::Absent => {
                tracing::debug!(index, path = %self.parent.path(), "child not found, using absent view");
                Node::absent(self.parent, index)
            }
            Resolution::Fatal(error) => panic!("{error}"),
        }
    }

    /// The child at `index`, or `None` when `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// See [`Elements::at`].
    pub fn get(&self, index: usize) -> Option<Node<'n, B>> {
        (index < self.end_index()).then(|| self.at(index))
    }

    pub fn first(&self) -> Option<Node<'n, B>> {
        self.get(self.start_index())
    }

    pub fn last(&self) -> Option<Node<'n, B>> {
        let end = self.end_index();
        (end > 0).then(|| self.at(end - 1))
    }

    /// Iterates over all positions, capturing the bounds once.
    pub fn iter(&self) -> ElementsIter<'n, B> {
        ElementsIter {
            elements: *self,
            front: self.start_index(),
            back: self.end_index(),
        }
    }

    /// Marks which children are absent.
    pub fn absence_map(&self) -> BitVec {
        self.iter().map(|node| node.is_absent()).collect()
    }
}

impl<'n, B: Binding + ?Sized> Clone for Elements<'n, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'n, B: Binding + ?Sized> Copy for Elements<'n, B> {}

impl<'n, B: Binding + ?Sized> Debug for Elements<'n, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("parent", self.parent)
            .finish()
    }
}

impl<'n, B: Binding + ?Sized> IntoIterator for Elements<'n, B> {
    type Item = Node<'n, B>;
    type IntoIter = ElementsIter<'n, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'n, B: Binding + ?Sized> IntoIterator for &'a Elements<'n, B> {
    type Item = Node<'n, B>;
    type IntoIter = ElementsIter<'n, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of [`Elements`], created by [`Elements::iter`].
pub struct ElementsIter<'n, B: Binding + ?Sized> {
    elements: Elements<'n, B>,
    front: usize,
    back: usize,
}

impl<'n, B: Binding + ?Sized> Iterator for ElementsIter<'n, B> {
    type Item = Node<'n, B>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front = self.elements.index_after(index);
        Some(self.elements.at(index))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'n, B: Binding + ?Sized> DoubleEndedIterator for ElementsIter<'n, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back = self.elements.index_before(self.back);
        Some(self.elements.at(self.back))
    }
}

impl<'n, B: Binding + ?Sized> ExactSizeIterator for ElementsIter<'n, B> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'n, B: Binding + ?Sized> FusedIterator for ElementsIter<'n, B> {}

impl<'n, B: Binding + ?Sized> Debug for ElementsIter<'n, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementsIter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
