use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::ProxyTypeRef;
use crate::operation::QueriedField;
use crate::operation::SchemaReferenceKind;
use crate::operation::SelectionPath;
use crate::operation::StructuralSelectionKind;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ResolvedType;
use crate::types::TypeResolver;

type Result<T> = std::result::Result<T, NarrowingError>;

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Evaluate one (merged) field selection on `parent_type`.
    ///
    /// `nodes` holds every selection of the field that shares one response key
    /// at one parent; their sub-selections are evaluated together. Arguments
    /// are taken from the first node.
    pub(crate) fn evaluate_field<T: ObjectOrInterfaceTypeTrait>(
        &mut self,
        parent_type: &'schema T,
        nodes: &[&'doc ast::operation::Field],
        path: SelectionPath,
    ) -> Result<QueriedField> {
        let Some(first_node) = nodes.first() else {
            return Err(NarrowingError::SchemaReferenceError {
                kind: SchemaReferenceKind::UndefinedField {
                    field_name: String::new(),
                    parent_type: parent_type.name().to_string(),
                },
                path,
            });
        };

        let field_def = parent_type.field(first_node.name.as_str())
            .ok_or_else(|| NarrowingError::SchemaReferenceError {
                kind: SchemaReferenceKind::UndefinedField {
                    field_name: first_node.name.to_owned(),
                    parent_type: parent_type.name().to_string(),
                },
                path: path.to_owned(),
            })?;

        let resolved_type = self.resolve_field_type(field_def, &path)?;
        let variable_uses = self.bind_variables(field_def, first_node, &path)?;

        let sub_selections: Vec<&'doc ast::operation::Selection> = nodes
            .iter()
            .flat_map(|node| node.selection_set.items.iter())
            .collect();

        let proxy_type = self.narrow_field_type(
            parent_type.name(),
            field_def,
            &resolved_type,
            sub_selections,
            &path,
        )?;

        Ok(QueriedField {
            alias: first_node.alias.to_owned(),
            definition: field_def.to_owned(),
            injected: false,
            origin_type: parent_type.name().to_string(),
            proxy_type,
            resolved_type,
            response_key: first_node.alias
                .as_deref()
                .unwrap_or(first_node.name.as_str())
                .to_string(),
            selection_location: Some(self.execdoc_location(&first_node.position)),
            variable_uses,
            path,
        })
    }

    /// Build a field the author did not select (an `id` for a Node type or a
    /// `__typename` discriminator). Returns `None` if `parent_type` has no
    /// such field.
    pub(crate) fn injected_field<T: ObjectOrInterfaceTypeTrait>(
        &self,
        parent_type: &'schema T,
        field_name: &str,
        path: &SelectionPath,
    ) -> Result<Option<QueriedField>> {
        let Some(field_def) = parent_type.field(field_name) else {
            return Ok(None);
        };
        let field_path = path.with_field(field_name);
        let resolved_type = self.resolve_field_type(field_def, &field_path)?;

        log::trace!("injecting `{}.{field_name}` at `{path}`", parent_type.name());
        Ok(Some(QueriedField {
            alias: None,
            definition: field_def.to_owned(),
            injected: true,
            origin_type: parent_type.name().to_string(),
            path: field_path,
            proxy_type: None,
            resolved_type,
            response_key: field_name.to_string(),
            selection_location: None,
            variable_uses: vec![],
        }))
    }

    /// Narrow the type of a field's value, mirroring its list and nullability
    /// wrappers onto the resulting [`ProxyTypeRef`].
    fn narrow_field_type(
        &mut self,
        parent_type_name: &str,
        field_def: &'schema Field,
        resolved_type: &ResolvedType,
        sub_selections: Vec<&'doc ast::operation::Selection>,
        path: &SelectionPath,
    ) -> Result<Option<ProxyTypeRef>> {
        let structural_error = |kind| NarrowingError::StructuralSelectionError {
            field_name: field_def.name().to_string(),
            kind,
            path: path.to_owned(),
            type_name: parent_type_name.to_string(),
        };

        let composite = match resolved_type {
            ResolvedType::List(of) => {
                let inner = self.narrow_field_type(
                    parent_type_name,
                    field_def,
                    of,
                    sub_selections,
                    path,
                )?;
                return Ok(inner.map(|of| ProxyTypeRef::List(Box::new(of))));
            },

            ResolvedType::Optional(of) => {
                let inner = self.narrow_field_type(
                    parent_type_name,
                    field_def,
                    of,
                    sub_selections,
                    path,
                )?;
                return Ok(inner.map(|of| ProxyTypeRef::Optional(Box::new(of))));
            },

            ResolvedType::Enum(_) | ResolvedType::Scalar(_) => {
                if !sub_selections.is_empty() {
                    return Err(structural_error(StructuralSelectionKind::ScalarOverSelected));
                }
                return Ok(None);
            },

            ResolvedType::InputObject(type_name) =>
                return Err(NarrowingError::SchemaReferenceError {
                    kind: SchemaReferenceKind::NotACompositeType {
                        type_name: type_name.to_owned(),
                    },
                    path: path.to_owned(),
                }),

            ResolvedType::Interface(_)
                | ResolvedType::Object(_)
                | ResolvedType::Union(_) => resolved_type,
        };

        if sub_selections.is_empty() {
            return Err(structural_error(StructuralSelectionKind::MissingSubSelection));
        }

        let proxy_ref = match composite {
            ResolvedType::Interface(type_name) => {
                let iface_type = self.schema.interface_type(type_name)
                    .ok_or_else(|| undefined_type(type_name, path))?;
                ProxyTypeRef::Interface(
                    self.narrow_interface(iface_type, sub_selections, path.to_owned())?,
                )
            },

            ResolvedType::Union(type_name) => {
                let union_type = self.schema.union_type(type_name)
                    .ok_or_else(|| undefined_type(type_name, path))?;
                ProxyTypeRef::Union(
                    self.narrow_union(union_type, sub_selections, path.to_owned())?,
                )
            },

            _ => {
                let type_name = composite.innermost_type_name();
                let obj_type = self.schema.object_type(type_name)
                    .ok_or_else(|| undefined_type(type_name, path))?;
                ProxyTypeRef::Object(
                    self.narrow_object(obj_type, sub_selections, path.to_owned(), None)?,
                )
            },
        };
        Ok(Some(proxy_ref))
    }

    fn resolve_field_type(
        &self,
        field_def: &Field,
        path: &SelectionPath,
    ) -> Result<ResolvedType> {
        TypeResolver::new(self.schema)
            .resolve(field_def.type_annotation())
            .map_err(|err| NarrowingError::from_type_resolution(
                err,
                || format!("field `{}.{}`", field_def.parent_type_name(), field_def.name()),
                path,
            ))
    }
}

fn undefined_type(type_name: &str, path: &SelectionPath) -> NarrowingError {
    NarrowingError::SchemaReferenceError {
        kind: SchemaReferenceKind::UndefinedType {
            type_name: type_name.to_string(),
        },
        path: path.to_owned(),
    }
}
