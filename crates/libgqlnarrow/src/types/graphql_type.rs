use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeHeader;
use crate::types::TypeKind;
use crate::types::UnionType;

/// Any named type a [`Schema`](crate::schema::Schema) defines, including the
/// five built-in scalars (which are [`GraphQLType::Scalar`]s with a
/// [`GraphQLBuiltIn`](crate::loc::SourceLocation::GraphQLBuiltIn) location).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(iface_type) => Some(iface_type),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(obj_type) => Some(obj_type),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(union_type) => Some(union_type),
            _ => None,
        }
    }

    pub fn header(&self) -> &TypeHeader {
        match self {
            Self::Enum(t) => &t.header,
            Self::InputObject(t) => &t.header,
            Self::Interface(t) => t.header(),
            Self::Object(t) => t.header(),
            Self::Scalar(t) => &t.header,
            Self::Union(t) => &t.header,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Interface(_) => TypeKind::Interface,
            Self::Object(_) => TypeKind::Object,
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Union(_) => TypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        self.header().name()
    }
}
