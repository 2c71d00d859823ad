use crate::types::TypeAnnotation;
use crate::types::TypeHeader;
use indexmap::IndexMap;

/// An [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Variables may be typed by input objects; their fields are only checked for
/// dangling type references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) header: TypeHeader,
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
}
impl InputObjectType {
    /// Field name -> declared type, in definition order.
    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn header(&self) -> &TypeHeader {
        &self.header
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }
}
