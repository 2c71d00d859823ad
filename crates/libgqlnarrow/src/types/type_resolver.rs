use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ResolvedType;
use crate::types::TypeAnnotation;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeResolutionError>;

/// Turns a [`TypeAnnotation`] into a [`ResolvedType`] by recursively
/// unwrapping it and looking the inner-most name up in a [`Schema`].
///
/// ```
/// # use libgqlnarrow::schema::SchemaBuilder;
/// # use libgqlnarrow::types::ResolvedType;
/// # use libgqlnarrow::types::ScalarKind;
/// # use libgqlnarrow::types::TypeResolver;
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { ids: [ID!] }")
///     .unwrap()
///     .build()
///     .unwrap();
/// let field = schema.object_type("Query").unwrap().field("ids").unwrap();
///
/// let resolved = TypeResolver::new(&schema)
///     .resolve(field.type_annotation())
///     .unwrap();
/// assert_eq!(resolved, ResolvedType::Optional(Box::new(
///     ResolvedType::List(Box::new(ResolvedType::Scalar(ScalarKind::ID))),
/// )));
/// ```
#[derive(Clone, Debug)]
pub struct TypeResolver<'schema> {
    max_list_depth: Option<usize>,
    schema: &'schema Schema,
}
impl<'schema> TypeResolver<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            max_list_depth: None,
            schema,
        }
    }

    /// Reject annotations that nest lists more deeply than `max_list_depth`.
    pub fn with_max_list_depth(mut self, max_list_depth: usize) -> Self {
        self.max_list_depth = Some(max_list_depth);
        self
    }

    pub fn resolve(&self, annot: &TypeAnnotation) -> Result<ResolvedType> {
        if let Some(max_list_depth) = self.max_list_depth {
            let list_depth = annot.list_depth();
            if list_depth > max_list_depth {
                return Err(TypeResolutionError::ListNestingTooDeep {
                    annotation: annot.to_graphql_string(),
                    list_depth,
                    max_list_depth,
                });
            }
        }
        self.resolve_impl(annot)
    }

    fn resolve_impl(&self, annot: &TypeAnnotation) -> Result<ResolvedType> {
        let resolved = match annot {
            TypeAnnotation::List { inner, .. } =>
                ResolvedType::List(Box::new(self.resolve_impl(inner)?)),
            TypeAnnotation::Named { type_ref, .. } => self.resolve_named(type_ref.name())?,
        };

        Ok(if annot.nullable() {
            ResolvedType::Optional(Box::new(resolved))
        } else {
            resolved
        })
    }

    /// Resolve a bare type name (no wrappers) against the schema.
    pub fn resolve_named(&self, type_name: &str) -> Result<ResolvedType> {
        let graphql_type = self.schema.get_type(type_name).ok_or_else(
            || TypeResolutionError::UndefinedType(type_name.to_string()),
        )?;

        Ok(match graphql_type {
            GraphQLType::Scalar(t) => ResolvedType::Scalar(t.kind().to_owned()),
            GraphQLType::Enum(t) => ResolvedType::Enum(t.name().to_string()),
            GraphQLType::InputObject(t) =>
                ResolvedType::InputObject(t.name().to_string()),
            GraphQLType::Interface(t) =>
                ResolvedType::Interface(t.name().to_string()),
            GraphQLType::Object(t) => ResolvedType::Object(t.name().to_string()),
            GraphQLType::Union(t) => ResolvedType::Union(t.name().to_string()),
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeResolutionError {
    #[error(
        "`{annotation}` nests lists {list_depth} levels deep, but at most \
        {max_list_depth} level(s) are supported here"
    )]
    ListNestingTooDeep {
        annotation: String,
        list_depth: usize,
        max_list_depth: usize,
    },

    #[error("The `{0}` type is not defined in the schema")]
    UndefinedType(String),
}

impl Schema {
    /// Resolve a [`TypeAnnotation`] against this schema. Shorthand for
    /// [`TypeResolver::new(self).resolve(annot)`](TypeResolver::resolve).
    pub fn resolve_type_annotation(
        &self,
        annot: &TypeAnnotation,
    ) -> Result<ResolvedType> {
        TypeResolver::new(self).resolve(annot)
    }
}
