use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field declared on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The built-in `__typename: String!` field every composite type has.
    pub(crate) fn typename(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::named(
                "String",
                /* nullable = */ false,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
        }
    }

    /// [`GraphQLBuiltIn`](loc::SourceLocation::GraphQLBuiltIn) for
    /// `__typename`.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Zero-based index of the named argument in the field's declared
    /// argument list. Variable uses are ordered by this.
    pub fn parameter_position(&self, param_name: &str) -> Option<usize> {
        self.parameters.get_index_of(param_name)
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
