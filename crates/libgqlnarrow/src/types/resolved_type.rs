/// The scalar leaves a [`ResolvedType`] can bottom out in.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarKind {
    Boolean,
    Custom(String),
    Float,
    ID,
    Int,
    String,
}
impl ScalarKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Custom(name) => name.as_str(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}

/// A fully-resolved schema type reference.
///
/// Unlike [`TypeAnnotation`](crate::types::TypeAnnotation), nullability is
/// expressed structurally: every nullable position is wrapped in
/// [`ResolvedType::Optional`] and every non-null position is left bare. Named
/// types carry the name of the schema type they resolved to, so a
/// `ResolvedType` never needs a [`Schema`](crate::schema::Schema) to be
/// inspected.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolvedType {
    Enum(String),
    InputObject(String),
    Interface(String),
    List(Box<ResolvedType>),
    Object(String),
    Optional(Box<ResolvedType>),
    Scalar(ScalarKind),
    Union(String),
}
impl ResolvedType {
    /// Strip every [`List`](Self::List) and [`Optional`](Self::Optional)
    /// wrapper and return the named type underneath.
    pub fn innermost(&self) -> &ResolvedType {
        match self {
            Self::List(inner) | Self::Optional(inner) => inner.innermost(),
            _ => self,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::Optional(inner) =>
                inner.innermost_type_name(),
            Self::Enum(name)
                | Self::InputObject(name)
                | Self::Interface(name)
                | Self::Object(name)
                | Self::Union(name) => name.as_str(),
            Self::Scalar(kind) => kind.name(),
        }
    }

    /// Whether the inner-most type is a scalar or enum (i.e. a type that must
    /// not carry a sub-selection).
    pub fn is_leaf(&self) -> bool {
        matches!(self.innermost(), Self::Enum(_) | Self::Scalar(_))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}
impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(of) => write!(f, "List<{of}>"),
            Self::Optional(of) => write!(f, "Optional<{of}>"),
            Self::Scalar(kind) => write!(f, "{}", kind.name()),
            Self::Enum(name)
                | Self::InputObject(name)
                | Self::Interface(name)
                | Self::Object(name)
                | Self::Union(name) => write!(f, "{name}"),
        }
    }
}
