use crate::types::TypeHeader;
use indexmap::IndexSet;

/// An [enum type](https://spec.graphql.org/October2021/#sec-Enums).
///
/// Narrowing treats enums as opaque leaves, so only the value names are kept.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) header: TypeHeader,
    pub(crate) values: IndexSet<String>,
}
impl EnumType {
    pub fn header(&self) -> &TypeHeader {
        &self.header
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }

    /// Value names in definition order; values added by `extend enum` come
    /// last.
    pub fn values(&self) -> &IndexSet<String> {
        &self.values
    }
}
