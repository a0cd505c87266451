//! Addressable nodes of the inspected view tree.
use std::fmt::{self, Debug};

use crate::traverse::{self, Children, Elements};
use crate::{Binding, Content, InspectionError, LazyGroup, NotAComposite};

/// Where a node sits relative to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// No positional metadata, as for the root of an inspection.
    #[default]
    Unspecified,
    /// The structural index within the parent's children.
    Index(usize),
    /// A human readable description of how the node was accessed, e.g. `"[3]"`.
    Call(String),
}

/// A view in the inspected tree together with its place in that tree.
///
/// A node holds its content exclusively and refers back to its parent without
/// owning it; children are always derived from the parent's content, so the
/// parent outlives them. A node whose content is the absent sentinel stands
/// for a child that could not be found and can be inspected like any other.
pub struct Node<'a, B: Binding + ?Sized> {
    binding: &'a B,
    content: Content<B::View>,
    parent: Option<&'a Node<'a, B>>,
    position: Position,
}

impl<'a, B: Binding + ?Sized> Node<'a, B> {
    /// Creates the root node of an inspection.
    pub fn root(binding: &'a B, view: B::View) -> Self {
        Self {
            binding,
            content: Content::View(view),
            parent: None,
            position: Position::Unspecified,
        }
    }

    /// Wraps `content` as a child of `parent`.
    ///
    /// Real views are checked with [`Binding::accept`]. Absent content is
    /// wrapped without consulting the binding.
    ///
    /// # Errors
    ///
    /// Whatever [`Binding::accept`] rejects the view with.
    pub fn new(
        content: Content<B::View>,
        parent: &'a Node<'a, B>,
        position: Position,
    ) -> Result<Self, InspectionError> {
        if let Content::View(view) = &content {
            parent.binding.accept(view, parent, &position)?;
        }

        Ok(Self {
            binding: parent.binding,
            content,
            parent: Some(parent),
            position,
        })
    }

    /// Creates an absent child of `parent` at `index`.
    pub fn absent(parent: &'a Node<'a, B>, index: usize) -> Self {
        Self {
            binding: parent.binding,
            content: Content::absent(),
            parent: Some(parent),
            position: Position::Index(index),
        }
    }

    /// Whether the node stands for a missing view.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.content.is_absent()
    }

    #[inline]
    pub fn content(&self) -> &Content<B::View> {
        &self.content
    }

    #[inline]
    pub fn into_content(self) -> Content<B::View> {
        self.content
    }

    /// Borrows the wrapped view, or `None` for an absent node.
    #[inline]
    pub fn view(&self) -> Option<&B::View> {
        self.content.view()
    }

    /// Returns the node's parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<&'a Node<'a, B>> {
        self.parent
    }

    #[inline]
    pub fn binding(&self) -> &'a B {
        self.binding
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The structural index the node was recorded with, if any.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self.position {
            Position::Index(index) => Some(index),
            _ => None,
        }
    }

    /// The access description the node was recorded with, if any.
    #[inline]
    pub fn call(&self) -> Option<&str> {
        match &self.position {
            Position::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Describes how the node is reached from the root, e.g. `VStack.[0].[2]`.
    pub fn path(&self) -> String {
        let segment = match &self.position {
            Position::Unspecified => self.describe(),
            Position::Index(index) => format!("[{index}]"),
            Position::Call(call) => call.clone(),
        };

        match self.parent {
            Some(parent) => format!("{}.{}", parent.path(), segment),
            None => segment,
        }
    }

    fn describe(&self) -> String {
        match &self.content {
            Content::View(view) => self.binding.describe(view),
            Content::Absent => "absent".to_owned(),
        }
    }

    /// Enumerates the structural children of the node.
    ///
    /// # Errors
    ///
    /// Returns [`NotAComposite`] for leaves and for absent nodes.
    pub fn try_children(&self) -> Result<LazyGroup<'_, B::View>, NotAComposite> {
        match &self.content {
            Content::View(view) => self.binding.children(view),
            Content::Absent => Err(NotAComposite::new(self.path())),
        }
    }

    /// Number of direct children. Zero for leaves and absent nodes.
    ///
    /// Recomputed from the content on every call.
    #[inline]
    pub fn child_count(&self) -> usize {
        traverse::child_count(self.binding, &self.content)
    }

    /// Same as [`Node::child_count`]; the count is always exact.
    #[inline]
    pub fn underestimated_count(&self) -> usize {
        self.child_count()
    }

    /// Fetches and wraps the child at `index`.
    ///
    /// The child is recorded with the access description `"[index]"`.
    ///
    /// # Errors
    ///
    ///  - [`InspectionError::ViewNotFound`] when there is no child at `index`,
    ///    including every index of a leaf or absent node, or when the binding
    ///    reports the child as missing.
    ///  - Any error raised while producing or wrapping the child.
    pub fn child(&self, index: usize) -> Result<Node<'_, B>, InspectionError> {
        let content = traverse::structural_children(self.binding, &self.content)
            .element(index)
            .map_err(|error| match error {
                InspectionError::ViewNotFound { .. } => {
                    InspectionError::view_not_found(self.path(), index)
                }
                error => error,
            })?;

        Node::new(content, self, Position::Call(format!("[{index}]")))
    }

    /// Iterates over the node's children in tree order.
    #[inline]
    pub fn children(&self) -> Children<'_, B> {
        Children::new(self)
    }

    /// Positional access to the node's children.
    #[inline]
    pub fn elements(&self) -> Elements<'_, B> {
        Elements::new(self)
    }
}

impl<'a, B: Binding + ?Sized> Clone for Node<'a, B>
where
    B::View: Clone,
{
    fn clone(&self) -> Self {
        Self {
            binding: self.binding,
            content: self.content.clone(),
            parent: self.parent,
            position: self.position.clone(),
        }
    }
}

impl<'a, B: Binding + ?Sized> Debug for Node<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("content", &self.content)
            .field("position", &self.position)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
