use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionPath;
use crate::types::TypeResolutionError;
use thiserror::Error;

/// Failure while narrowing one operation. Evaluation stops at the first
/// error; no partial artifact is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NarrowingError {
    #[error(
        "Fragment spreads form a cycle: {}",
        .cycle.join(" → "),
    )]
    FragmentCycleError {
        cycle: Vec<String>,
    },

    #[error("{kind} (at `{path}`)")]
    SchemaReferenceError {
        kind: SchemaReferenceKind,
        path: SelectionPath,
    },

    #[error("{kind}: `{type_name}.{field_name}` (at `{path}`)")]
    StructuralSelectionError {
        field_name: String,
        kind: StructuralSelectionKind,
        path: SelectionPath,
        type_name: String,
    },

    #[error("Spread of undefined fragment `{fragment_name}` (at `{path}`)")]
    UndefinedFragmentError {
        fragment_name: String,
        path: SelectionPath,
    },

    #[error(
        "Anonymous {kind} operation at {location}: operations must be named"
    )]
    UnnamedOperationError {
        kind: OperationKind,
        location: loc::SourceLocation,
    },

    #[error("{kind} (at `{path}`)")]
    UnsupportedConstructError {
        kind: UnsupportedConstructKind,
        path: SelectionPath,
    },

    #[error("{kind} (at `{path}`)")]
    VariableBindingError {
        kind: VariableBindingKind,
        path: SelectionPath,
    },
}

impl NarrowingError {
    /// Attribute a [`TypeResolutionError`] to `subject` (e.g. "variable
    /// `$ids`") at `path`.
    pub(crate) fn from_type_resolution(
        err: TypeResolutionError,
        subject: impl FnOnce() -> String,
        path: &SelectionPath,
    ) -> Self {
        match err {
            TypeResolutionError::ListNestingTooDeep { annotation, .. } =>
                Self::UnsupportedConstructError {
                    kind: UnsupportedConstructKind::NestedListType {
                        subject: subject(),
                        type_annotation: annotation,
                    },
                    path: path.to_owned(),
                },
            TypeResolutionError::UndefinedType(type_name) =>
                Self::SchemaReferenceError {
                    kind: SchemaReferenceKind::UndefinedType { type_name },
                    path: path.to_owned(),
                },
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaReferenceKind {
    #[error("`{type_name}` is not an object, interface, or union type")]
    NotACompositeType {
        type_name: String,
    },

    #[error("The `{parent_type}` type has no field named `{field_name}`")]
    UndefinedField {
        field_name: String,
        parent_type: String,
    },

    #[error("The schema defines no {operation} root operation type")]
    UndefinedRootOperationType {
        operation: OperationKind,
    },

    #[error("The `{type_name}` type is not defined in the schema")]
    UndefinedType {
        type_name: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StructuralSelectionKind {
    #[error("Field of composite type selected without a sub-selection")]
    MissingSubSelection,

    #[error("Sub-selection on a field of scalar or enum type")]
    ScalarOverSelected,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnsupportedConstructKind {
    #[error(
        "Operations must select exactly one root field, but {} were selected: {}",
        .response_keys.len(),
        .response_keys.join(", "),
    )]
    MultipleRootFields {
        response_keys: Vec<String>,
    },

    #[error(
        "{subject} has type `{type_annotation}`, which nests lists more deeply \
        than supported"
    )]
    NestedListType {
        subject: String,
        type_annotation: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariableBindingKind {
    #[error(
        "Arguments of `{field_name}` reference {references} variable(s) but \
        only {bindings} could be bound to a declared parameter"
    )]
    BindingCountMismatch {
        bindings: usize,
        field_name: String,
        references: usize,
    },

    #[error("Argument `{argument_name}` references undeclared variable `${variable_name}`")]
    UndeclaredVariable {
        argument_name: String,
        variable_name: String,
    },
}

/// A [`NarrowingError`] tagged with the operation it occurred in.
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Failed to evaluate operation `{}` ({location}): {error}",
    .operation_name.as_deref().unwrap_or("<anonymous>"),
)]
pub struct OperationEvaluationError {
    pub error: NarrowingError,
    pub location: loc::SourceLocation,
    pub operation_name: Option<String>,
}
