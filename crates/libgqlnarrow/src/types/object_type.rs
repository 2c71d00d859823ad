use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeHeader;
use indexmap::IndexMap;
use inherent::inherent;

/// An [object type](https://spec.graphql.org/October2021/#sec-Objects).
/// Root operation types are ordinary object types.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// Includes the built-in `__typename` field.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// Fields in definition order, starting with `__typename`. Fields added
    /// by `extend type` follow those of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn header(&self) -> &TypeHeader {
        self.0.header()
    }

    /// Follows interface inheritance, so `Dog implements Pet` and
    /// `interface Pet implements Animal` make a `Dog` an `Animal` too.
    pub fn implements_interface(&self, schema: &Schema, interface_name: &str) -> bool {
        self.0.implements_interface(schema, interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// Whether the type satisfies the Node identity contract: it implements
    /// `Node` and exposes an `id` field of type `ID`.
    pub fn is_node(&self) -> bool {
        self.0.is_node()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
