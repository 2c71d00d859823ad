use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeHeader;
use crate::types::TypeRef;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    /// Always starts with the built-in `__typename` field.
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) header: TypeHeader,
    /// Directly implemented interfaces, in declaration order.
    pub(crate) interfaces: Vec<TypeRef>,
    /// Set once the whole schema is known; see `SchemaBuilder::build()`.
    pub(crate) is_node: bool,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn header(&self) -> &TypeHeader {
        &self.header
    }

    pub fn implements_interface(&self, schema: &Schema, interface_name: &str) -> bool {
        self.interfaces.iter().any(|iface_ref| {
            iface_ref.name() == interface_name
                || iface_ref
                    .resolve(schema)
                    .and_then(GraphQLType::as_interface)
                    .is_some_and(|iface| iface.implements_interface(schema, interface_name))
        })
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(TypeRef::name).collect()
    }

    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.resolve(schema).and_then(GraphQLType::as_interface))
            .collect()
    }

    pub fn is_node(&self) -> bool {
        self.is_node
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }
}
