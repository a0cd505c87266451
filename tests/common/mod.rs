//! A small view framework used to exercise the traversal.
#![allow(dead_code)]

use view_inspect::{Binding, Content, InspectionError, LazyGroup, Node, NotAComposite, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Text(String),
    Stack(Vec<View>),
    /// Reported as missing when fetched from its parent.
    Quirk,
    /// Refuses to be wrapped into a node.
    Broken,
    /// Fetched normally, but reported as missing when wrapped.
    Hidden,
}

pub fn text(label: &str) -> View {
    View::Text(label.to_owned())
}

pub fn stack(children: impl IntoIterator<Item = View>) -> View {
    View::Stack(children.into_iter().collect())
}

pub struct Views;

impl Binding for Views {
    type View = View;

    fn children<'v>(&'v self, view: &'v View) -> Result<LazyGroup<'v, View>, NotAComposite> {
        let View::Stack(children) = view else {
            return Err(NotAComposite::new(self.describe(view)));
        };

        Ok(LazyGroup::new(children.len(), move |index| {
            match &children[index] {
                View::Quirk => Err(InspectionError::view_not_found("Stack", index)),
                child => Ok(Content::View(child.clone())),
            }
        }))
    }

    fn accept(
        &self,
        view: &View,
        _parent: &Node<'_, Self>,
        _position: &Position,
    ) -> Result<(), InspectionError> {
        match view {
            View::Broken => Err(InspectionError::construction("broken view")),
            View::Hidden => Err(InspectionError::view_not_found("Hidden", 0)),
            _ => Ok(()),
        }
    }

    fn describe(&self, view: &View) -> String {
        match view {
            View::Text(label) => format!("Text({label})"),
            View::Stack(_) => "Stack".to_owned(),
            View::Quirk => "Quirk".to_owned(),
            View::Broken => "Broken".to_owned(),
            View::Hidden => "Hidden".to_owned(),
        }
    }
}
