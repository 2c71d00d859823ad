use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A by-name edge from one schema element to a schema type: a field's result
/// type, an implemented interface, a union member or a root operation type.
///
/// The referenced type is looked up on demand through the owning [`Schema`],
/// which lets the schema own every type without self-references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeRef {
    name: String,
    ref_location: loc::SourceLocation,
}
impl TypeRef {
    pub(crate) fn new(name: impl Into<String>, ref_location: loc::SourceLocation) -> Self {
        Self {
            name: name.into(),
            ref_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference was written (not where the type is defined).
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }

    /// `None` when `schema` defines no type by this name.
    pub fn resolve<'schema>(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        schema.get_type(self.name.as_str())
    }
}
