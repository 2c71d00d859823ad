use crate::loc;
use crate::operation::SelectionPath;
use crate::types::ResolvedType;
use crate::types::TypeAnnotation;

/// A variable declared in an operation's signature (e.g. `$id: ID!`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) resolved_type: ResolvedType,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The declared default value, rendered as GraphQL source text.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolved_type(&self) -> &ResolvedType {
        &self.resolved_type
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// A reference to a declared variable from a field argument.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableUse {
    pub(crate) argument_name: String,
    pub(crate) argument_position: usize,
    pub(crate) field_path: SelectionPath,
    pub(crate) variable_name: String,
}
impl VariableUse {
    pub fn argument_name(&self) -> &str {
        self.argument_name.as_str()
    }

    /// Zero-based position of the argument in the field definition's
    /// parameter list.
    pub fn argument_position(&self) -> usize {
        self.argument_position
    }

    pub fn field_path(&self) -> &SelectionPath {
        &self.field_path
    }

    pub fn variable_name(&self) -> &str {
        self.variable_name.as_str()
    }
}
