use crate::loc;
use crate::types::TypeAnnotation;

/// A declared argument of a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// Rendered back to GraphQL source (e.g. `10` or `[RED, BLUE]`).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
