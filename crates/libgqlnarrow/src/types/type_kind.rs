/// The kind of a [`GraphQLType`](crate::types::GraphQLType), without its
/// definition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// Object, interface and union types are the only kinds that accept (and
    /// require) a sub-selection.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// The SDL keyword that introduces a definition of this kind.
    pub fn sdl_keyword(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        })
    }
}
