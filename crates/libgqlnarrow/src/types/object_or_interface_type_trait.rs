use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::TypeHeader;
use indexmap::IndexMap;

/// The field-bearing surface shared by [`ObjectType`](crate::types::ObjectType)
/// and [`InterfaceType`]. Both also expose these methods inherently.
pub trait ObjectOrInterfaceTypeTrait {
    fn field(&self, field_name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn header(&self) -> &TypeHeader;
    fn implements_interface(&self, schema: &Schema, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;
    fn is_node(&self) -> bool;
    fn name(&self) -> &str;
}
