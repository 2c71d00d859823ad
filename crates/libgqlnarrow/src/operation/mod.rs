mod document_evaluator;
mod field_evaluator;
mod fragment_definition;
mod fragment_index;
mod fragment_resolver;
mod interface_narrowing;
mod narrowing_context;
mod narrowing_error;
mod object_narrowing;
mod operation_artifact;
mod operation_evaluator;
mod operation_kind;
mod proxy;
mod proxy_registry;
mod queried_field;
mod selection_flattener;
mod selection_path;
mod union_narrowing;
mod variable;
mod variable_binder;

pub use document_evaluator::DocumentEvaluationError;
pub use document_evaluator::DocumentEvaluator;
pub use document_evaluator::DocumentLoadError;
pub use fragment_definition::FragmentDefinition;
pub use fragment_index::FragmentIndex;
pub use fragment_index::FragmentIndexError;
pub use narrowing_context::NarrowingContext;
pub use narrowing_context::NarrowingStats;
pub use narrowing_error::NarrowingError;
pub use narrowing_error::OperationEvaluationError;
pub use narrowing_error::SchemaReferenceKind;
pub use narrowing_error::StructuralSelectionKind;
pub use narrowing_error::UnsupportedConstructKind;
pub use narrowing_error::VariableBindingKind;
pub use operation_artifact::OperationArtifact;
pub use operation_evaluator::OperationEvaluator;
pub use operation_kind::OperationKind;
pub use proxy::ProxyId;
pub use proxy::ProxyInterfaceType;
pub use proxy::ProxyKey;
pub use proxy::ProxyObjectType;
pub use proxy::ProxyType;
pub use proxy::ProxyTypeRef;
pub use proxy::ProxyUnionType;
pub use proxy_registry::ProxyRegistry;
pub use queried_field::QueriedField;
pub use selection_path::PathSegment;
pub use selection_path::SelectionPath;
pub use variable::VariableDefinition;
pub use variable::VariableUse;

#[cfg(test)]
mod tests;
