mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod resolved_type;
mod scalar_type;
mod type_annotation;
mod type_header;
mod type_kind;
mod type_ref;
mod type_resolver;
mod union_type;

pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use resolved_type::ResolvedType;
pub use resolved_type::ScalarKind;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_header::TypeHeader;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub use type_resolver::TypeResolutionError;
pub use type_resolver::TypeResolver;
pub use union_type::UnionType;
