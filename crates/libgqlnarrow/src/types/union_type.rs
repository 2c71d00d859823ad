use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeHeader;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) header: TypeHeader,
    pub(crate) members: IndexMap<String, TypeRef>,
}
impl UnionType {
    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    pub fn header(&self) -> &TypeHeader {
        &self.header
    }

    /// Member names in the order the union lists them; members added by
    /// `extend union` come last.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    pub fn member_types<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema ObjectType> {
        self.members
            .values()
            .filter_map(|member| member.resolve(schema).and_then(GraphQLType::as_object))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.header.name()
    }
}
