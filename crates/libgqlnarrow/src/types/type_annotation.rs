use crate::ast;
use crate::loc;
use crate::types::TypeRef;

/// A type as written in GraphQL source: a type name wrapped in any number of
/// list and non-null markers.
///
/// This is the unresolved form used by [`Field`](crate::types::Field)s,
/// [`Parameter`](crate::types::Parameter)s and operation
/// [`VariableDefinition`](crate::operation::VariableDefinition)s.
/// [`TypeResolver`](crate::types::TypeResolver) turns it into a
/// [`ResolvedType`](crate::types::ResolvedType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
        ref_location: loc::SourceLocation,
    },
    Named {
        nullable: bool,
        type_ref: TypeRef,
    },
}
impl TypeAnnotation {
    /// graphql-parser does not track where a type annotation starts, so
    /// every level of the result shares `location`.
    pub(crate) fn from_ast_type(location: &loc::SourceLocation, ast_type: &ast::operation::Type) -> Self {
        use ast::operation::Type;

        let (ast_type, nullable) = match ast_type {
            Type::NonNullType(inner) => (inner.as_ref(), false),
            other => (other, true),
        };
        match ast_type {
            Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_type(location, inner)),
                nullable,
                ref_location: location.to_owned(),
            },
            Type::NamedType(name) => Self::named(name, nullable, location.to_owned()),
            // `T!!` is rejected by the parser.
            Type::NonNullType(inner) => Self::from_ast_type(location, inner),
        }
    }

    pub(crate) fn named(
        type_name: impl Into<String>,
        nullable: bool,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self::Named {
            nullable,
            type_ref: TypeRef::new(type_name, ref_location),
        }
    }

    /// The annotation a list wraps, or `None` for a named annotation.
    pub fn list_inner(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    pub fn innermost_type_ref(&self) -> &TypeRef {
        match self {
            Self::List { inner, .. } => inner.innermost_type_ref(),
            Self::Named { type_ref, .. } => type_ref,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_type_ref().name()
    }

    /// Number of list wrappers around the inner-most named type.
    pub fn list_depth(&self) -> usize {
        self.list_inner().map_or(0, |inner| 1 + inner.list_depth())
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List { ref_location, .. } => ref_location,
            Self::Named { type_ref, .. } => type_ref.ref_location(),
        }
    }

    /// e.g. `[ID!]!`
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, .. } => write!(f, "[{inner}]")?,
            Self::Named { type_ref, .. } => f.write_str(type_ref.name())?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
