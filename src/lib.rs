//! Lazy, positional traversal over the children of an inspected view tree.
//!
//! The view framework itself is supplied through a [`Binding`], which knows how
//! to enumerate the children of a composite view and which views can be
//! wrapped into a [`Node`]. On top of that this crate offers two independent
//! ways to visit the children of a node:
//!
//!  - [`Node::children`] yields the children in a single best-effort pass.
//!  - [`Node::elements`] addresses children by position, recomputing everything
//!    on each access.
//!
//! A child that can not be found is represented by an absent node rather than
//! an error, see [`Node::is_absent`].
//!
//! # Example
//!
//! ```
//! use view_inspect::{Binding, Content, LazyGroup, Node, NotAComposite};
//!
//! struct Stacks;
//!
//! impl Binding for Stacks {
//!     type View = Vec<u32>;
//!
//!     fn children<'v>(&'v self, view: &'v Vec<u32>) -> Result<LazyGroup<'v, Vec<u32>>, NotAComposite> {
//!         if view.is_empty() {
//!             return Err(NotAComposite::new("leaf"));
//!         }
//!         Ok(LazyGroup::new(view.len(), move |index| Ok(Content::View(vec![0; view[index] as usize]))))
//!     }
//! }
//!
//! let root = Node::root(&Stacks, vec![2, 0, 1]);
//! assert_eq!(root.child_count(), 3);
//! assert!(root.children().all(|child| !child.is_absent()));
//!
//! let elements = root.elements();
//! assert_eq!(elements.at(0).child_count(), 2);
//! assert_eq!(elements.at(1).child_count(), 0);
//! ```
//!
//! # Tree mutation
//!
//! Nothing is cached between calls and nothing is locked. All traversal of one
//! tree must happen while the tree is not being mutated.

pub mod binding;
pub mod content;
pub mod error;
pub mod group;
pub mod node;
pub mod traverse;

pub use binding::Binding;
pub use content::Content;
pub use error::{InspectionError, NotAComposite, Resolution};
pub use group::LazyGroup;
pub use node::{Node, Position};
pub use traverse::{Children, Elements, ElementsIter, Step};
