//! Errors raised while traversing the view tree.
use thiserror::Error;

/// A view was asked for its children but is not a composite.
///
/// This is the expected outcome for leaf views, and traversal treats it as
/// "no children" rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{view}` is not a composite view")]
pub struct NotAComposite {
    /// Description of the offending view.
    pub view: String,
}

impl NotAComposite {
    pub fn new(view: impl Into<String>) -> Self {
        Self { view: view.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectionError {
    /// There is no child at a structural position. Traversal turns this into
    /// an absent node.
    #[error("search did not find a view at index {index} of `{parent}`")]
    ViewNotFound { parent: String, index: usize },
    #[error(transparent)]
    NotAComposite(#[from] NotAComposite),
    #[error("failed to construct node: {reason}")]
    Construction { reason: String },
}

impl InspectionError {
    pub fn view_not_found(parent: impl Into<String>, index: usize) -> Self {
        Self::ViewNotFound {
            parent: parent.into(),
            index,
        }
    }

    pub fn construction(reason: impl Into<String>) -> Self {
        Self::Construction {
            reason: reason.into(),
        }
    }

    /// Whether this is the recognized "no such child" signal.
    #[inline]
    pub fn is_view_not_found(&self) -> bool {
        matches!(self, Self::ViewNotFound { .. })
    }
}

/// Outcome of a lookup, split by how traversal has to react to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The lookup succeeded.
    Found(T),
    /// The lookup hit an expected miss and the result should be absent.
    Absent,
    /// Any other failure.
    Fatal(InspectionError),
}

impl<T> Resolution<T> {
    /// Routes [`InspectionError::ViewNotFound`] to [`Resolution::Absent`] and
    /// every other error to [`Resolution::Fatal`].
    pub fn from_result(result: Result<T, InspectionError>) -> Self {
        match result {
            Ok(value) => Resolution::Found(value),
            Err(error) if error.is_view_not_found() => Resolution::Absent,
            Err(error) => Resolution::Fatal(error),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Resolution::Fatal(_))
    }
}

impl<T> From<Result<T, InspectionError>> for Resolution<T> {
    fn from(result: Result<T, InspectionError>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_resolves_to_absent() {
        let result: Result<(), _> = Err(InspectionError::view_not_found("HStack", 1));
        assert_eq!(Resolution::from_result(result), Resolution::Absent);
    }

    #[test]
    fn other_errors_are_fatal() {
        let result: Result<(), _> = Err(NotAComposite::new("Text").into());
        assert!(Resolution::from_result(result).is_fatal());

        let result: Result<(), _> = Err(InspectionError::construction("type mismatch"));
        assert!(Resolution::from_result(result).is_fatal());

        assert!(Resolution::from_result(Ok(3)).is_found());
    }

    #[test]
    fn messages() {
        assert_eq!(
            InspectionError::view_not_found("VStack", 2).to_string(),
            "search did not find a view at index 2 of `VStack`"
        );
        assert_eq!(
            InspectionError::from(NotAComposite::new("Text")).to_string(),
            "`Text` is not a composite view"
        );
    }
}
