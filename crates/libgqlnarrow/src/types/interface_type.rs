use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeHeader;
use indexmap::IndexMap;
use inherent::inherent;

/// An [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
///
/// Use [`Schema::implementors_of()`] for the object types that implement it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn header(&self) -> &TypeHeader {
        self.0.header()
    }

    /// Never true for `interface_name == self.name()`: the schema builder
    /// rejects interfaces that implement themselves.
    pub fn implements_interface(&self, schema: &Schema, interface_name: &str) -> bool {
        self.0.implements_interface(schema, interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// Interfaces this interface directly extends.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// True for `Node` itself and for any interface extending it that
    /// declares `id: ID`.
    pub fn is_node(&self) -> bool {
        self.0.is_node()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
