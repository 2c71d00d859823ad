use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarKind;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeHeader;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const NODE_INTERFACE_NAME: &str = "Node";

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// Type extensions are collected while loading and applied in [`build()`]
/// (`SchemaBuilder::build`), so an `extend type` may appear before the type
/// it extends (e.g. in an earlier file).
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        self.check_type_references()?;
        self.check_interface_cycles()?;
        self.mark_node_types();
        let implementors = self.build_implementors_index();

        let explicit_query_type = self.query_type.take();
        let explicit_mutation_type = self.mutation_type.take();
        let explicit_subscription_type = self.subscription_type.take();

        let query_type =
            match self.root_type_ref(OperationKind::Query, explicit_query_type)? {
                Some(type_ref) => type_ref,
                None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
            };
        let mutation_type = self.root_type_ref(
            OperationKind::Mutation,
            explicit_mutation_type,
        )?;
        let subscription_type = self.root_type_ref(
            OperationKind::Subscription,
            explicit_subscription_type,
        )?;

        log::debug!(
            "built schema with {} types (query root: `{}`)",
            self.types.len(),
            query_type.name(),
        );

        Ok(Schema {
            implementors,
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Shorthand for `SchemaBuilder::new().load_files(..)`.
    pub fn from_files(file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    /// Shorthand for `SchemaBuilder::new().load_str(None, ..)`.
    pub fn from_str(content: impl AsRef<str>) -> Result<Self> {
        Self::new().load_str(None, content.as_ref())
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types: [
                ScalarKind::Boolean,
                ScalarKind::Float,
                ScalarKind::ID,
                ScalarKind::Int,
                ScalarKind::String,
            ].into_iter().map(|kind| {
                let builtin = GraphQLType::Scalar(ScalarType::builtin(kind));
                (builtin.name().to_string(), builtin)
            }).collect(),
        }
    }

    fn add_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        let type_name = graphql_type.name().to_string();
        if let Some(existing) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing.header().def_location().to_owned(),
                def2: graphql_type.header().def_location().to_owned(),
            });
        }
        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, ext_position, extension_kind) = match &ext {
            TypeExtension::Enum(e) => (&e.name, e.position, TypeKind::Enum),
            TypeExtension::InputObject(e) => (&e.name, e.position, TypeKind::InputObject),
            TypeExtension::Interface(e) => (&e.name, e.position, TypeKind::Interface),
            TypeExtension::Object(e) => (&e.name, e.position, TypeKind::Object),
            TypeExtension::Scalar(e) => (&e.name, e.position, TypeKind::Scalar),
            TypeExtension::Union(e) => (&e.name, e.position, TypeKind::Union),
        };
        let ext_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ext_position,
        );
        let type_name = type_name.to_string();

        let Some(existing) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location: ext_srcloc,
            });
        };

        if existing.kind() != extension_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                extension_kind,
                extension_location: ext_srcloc,
                type_kind: existing.kind(),
                type_name,
            });
        }

        match (existing, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.values.extend(ext.values.into_iter().map(|value| value.name));
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                inputobj_type.fields.extend(input_fields_from_ast(&ext_srcloc, &ext.fields));
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                extend_object_or_interface(
                    &mut iface_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.fields,
                )?;
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                extend_object_or_interface(
                    &mut obj_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.fields,
                )?;
            },

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                for member_name in ext.types {
                    let member_ref = TypeRef::new(member_name.as_str(), ext_srcloc.to_owned());
                    union_type.members.insert(member_name, member_ref);
                }
            },

            // Scalar extensions only add directives, which carry no
            // information we use.
            _ => (),
        }

        Ok(())
    }

    fn build_implementors_index(&self) -> IndexMap<String, Vec<String>> {
        let mut implementors: IndexMap<String, Vec<String>> = self.types
            .values()
            .filter_map(GraphQLType::as_interface)
            .map(|iface| (iface.name().to_string(), vec![]))
            .collect();

        for obj_type in self.types.values().filter_map(GraphQLType::as_object) {
            for iface_name in transitive_interface_names(&self.types, &obj_type.0) {
                if let Some(type_names) = implementors.get_mut(iface_name.as_str()) {
                    type_names.push(obj_type.name().to_string());
                }
            }
        }

        implementors
    }

    fn check_interface_cycles(&self) -> Result<()> {
        for iface in self.types.values().filter_map(GraphQLType::as_interface) {
            if transitive_interface_names(&self.types, &iface.0)
                .contains(iface.name()) {
                return Err(SchemaBuildError::CyclicInterfaceImplementation {
                    interface_name: iface.name().to_string(),
                    location: iface.header().def_location().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Verify that every name referenced by a type definition refers to a
    /// type of an appropriate kind.
    fn check_type_references(&self) -> Result<()> {
        let check_annotation = |annot: &TypeAnnotation| -> Result<()> {
            let type_ref = annot.innermost_type_ref();
            match self.types.contains_key(type_ref.name()) {
                true => Ok(()),
                false => Err(SchemaBuildError::UndefinedTypeReference {
                    type_name: type_ref.name().to_string(),
                    location: type_ref.ref_location().to_owned(),
                }),
            }
        };

        for graphql_type in self.types.values() {
            match graphql_type {
                GraphQLType::Interface(InterfaceType(data))
                    | GraphQLType::Object(ObjectType(data)) => {
                    for iface_ref in &data.interfaces {
                        match self.types.get(iface_ref.name()) {
                            Some(GraphQLType::Interface(_)) => (),
                            Some(_) => return Err(SchemaBuildError::InvalidInterfaceReference {
                                interface_name: iface_ref.name().to_string(),
                                location: iface_ref.ref_location().to_owned(),
                                type_name: data.header.name.to_owned(),
                            }),
                            None => return Err(SchemaBuildError::UndefinedTypeReference {
                                type_name: iface_ref.name().to_string(),
                                location: iface_ref.ref_location().to_owned(),
                            }),
                        }
                    }
                    for field in data.fields.values() {
                        check_annotation(field.type_annotation())?;
                        for param in field.parameters().values() {
                            check_annotation(param.type_annotation())?;
                        }
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    for field_annot in inputobj_type.fields().values() {
                        check_annotation(field_annot)?;
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_ref in union_type.members.values() {
                        match self.types.get(member_ref.name()) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => return Err(SchemaBuildError::InvalidUnionMember {
                                location: member_ref.ref_location().to_owned(),
                                member_name: member_ref.name().to_string(),
                                union_name: union_type.name().to_string(),
                            }),
                            None => return Err(SchemaBuildError::UndefinedTypeReference {
                                type_name: member_ref.name().to_string(),
                                location: member_ref.ref_location().to_owned(),
                            }),
                        }
                    }
                },

                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
            }
        }

        Ok(())
    }

    /// Flag every object and interface type that satisfies the Node identity
    /// contract: it is (or transitively implements) the `Node` interface and
    /// it exposes an `id` field whose inner-most type is `ID`.
    fn mark_node_types(&mut self) {
        let node_type_names: Vec<String> = self.types
            .values()
            .filter_map(|graphql_type| match graphql_type {
                GraphQLType::Interface(InterfaceType(data))
                    | GraphQLType::Object(ObjectType(data)) => Some(data),
                _ => None,
            })
            .filter(|data| {
                let is_node_iface = data.header.name == NODE_INTERFACE_NAME
                    && matches!(
                        self.types.get(NODE_INTERFACE_NAME),
                        Some(GraphQLType::Interface(_)),
                    );
                let implements_node =
                    transitive_interface_names(&self.types, data)
                        .contains(NODE_INTERFACE_NAME);
                let has_id_field = data.fields
                    .get("id")
                    .map(|field| field.type_annotation().innermost_type_name() == "ID")
                    .unwrap_or(false);
                (is_node_iface || implements_node) && has_id_field
            })
            .map(|data| data.header.name.to_owned())
            .collect();

        for type_name in node_type_names {
            match self.types.get_mut(type_name.as_str()) {
                Some(GraphQLType::Interface(InterfaceType(data)))
                    | Some(GraphQLType::Object(ObjectType(data))) =>
                    data.is_node = true,
                _ => (),
            }
        }
    }

    fn root_type_ref(
        &self,
        kind: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<TypeRef>> {
        let typedef_loc = match explicit_def {
            Some(def) => def,
            None => match self.types.get(kind.default_root_type_name()) {
                Some(GraphQLType::Object(obj_type)) => NamedTypeDefLocation {
                    def_location: obj_type.header().def_location().to_owned(),
                    type_name: obj_type.name().to_string(),
                },
                _ => return Ok(None),
            },
        };

        match self.types.get(typedef_loc.type_name.as_str()) {
            Some(GraphQLType::Object(_)) =>
                Ok(Some(TypeRef::new(typedef_loc.type_name, typedef_loc.def_location))),
            Some(_) => Err(SchemaBuildError::InvalidRootOperationType {
                location: typedef_loc.def_location,
                operation: kind,
                type_name: typedef_loc.type_name,
            }),
            None => Err(SchemaBuildError::UndefinedTypeReference {
                type_name: typedef_loc.type_name,
                location: typedef_loc.def_location,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((
                    file_path.map(|path| path.to_path_buf()),
                    type_ext,
                ));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "ignoring directive definition `@{}`",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (kind, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                &schema_def.position,
            );
            let slot = match kind {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let header = |position: &ast::AstPos, description: Option<String>, name: String| TypeHeader {
            def_location: loc::SourceLocation::from_schema_ast_position(file_path, position),
            description,
            name,
        };

        let graphql_type = match type_def {
            TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
                header: header(&def.position, def.description, def.name),
                values: def.values.into_iter().map(|value| value.name).collect(),
            }),

            TypeDefinition::InputObject(def) => {
                let header = header(&def.position, def.description, def.name);
                GraphQLType::InputObject(InputObjectType {
                    fields: input_fields_from_ast(&header.def_location, &def.fields),
                    header,
                })
            },

            TypeDefinition::Interface(def) => GraphQLType::Interface(InterfaceType(
                object_or_interface_data_from_ast(
                    header(&def.position, def.description, def.name),
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            )),

            TypeDefinition::Object(def) => GraphQLType::Object(ObjectType(
                object_or_interface_data_from_ast(
                    header(&def.position, def.description, def.name),
                    &def.implements_interfaces,
                    &def.fields,
                )?,
            )),

            TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType::custom(
                header(&def.position, def.description, def.name),
            )),

            TypeDefinition::Union(def) => {
                let header = header(&def.position, def.description, def.name);
                // graphql-parser records no positions for union members.
                let members = def.types
                    .into_iter()
                    .map(|member_name| {
                        let member_ref = TypeRef::new(
                            member_name.as_str(),
                            header.def_location.to_owned(),
                        );
                        (member_name, member_ref)
                    })
                    .collect();
                GraphQLType::Union(UnionType { header, members })
            },
        };

        self.add_type(graphql_type)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_object_or_interface(
    data: &mut ObjectOrInterfaceTypeData,
    ext_srcloc: &loc::SourceLocation,
    implements_interfaces: &[String],
    fields: &[ast::schema::Field],
) -> Result<()> {
    data.interfaces.extend(
        implements_interfaces
            .iter()
            .map(|iface_name| TypeRef::new(iface_name, ext_srcloc.to_owned())),
    );

    for (field_name, field) in fielddefs_from_ast(ext_srcloc, &data.header.name, fields)? {
        if let Some(existing) = data.fields.get(field_name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
                field_name,
                type_name: data.header.name.to_owned(),
            });
        }
        data.fields.insert(field_name, field);
    }

    Ok(())
}

fn fielddefs_from_ast(
    type_def_location: &loc::SourceLocation,
    type_name: &str,
    fields: &[ast::schema::Field],
) -> Result<IndexMap<String, Field>> {
    let mut field_map: IndexMap<String, Field> = IndexMap::new();

    for field in fields {
        let field_srcloc = type_def_location.with_ast_position(&field.position);

        if let Some(existing) = field_map.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing.def_location().to_owned(),
                field_def2: field_srcloc,
                field_name: field.name.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        let parameters = field.arguments
            .iter()
            .map(|arg| {
                let arg_srcloc = type_def_location.with_ast_position(&arg.position);
                (arg.name.to_owned(), Parameter {
                    default_value: arg.default_value.as_ref().map(ToString::to_string),
                    name: arg.name.to_owned(),
                    type_annotation: TypeAnnotation::from_ast_type(&arg_srcloc, &arg.value_type),
                    def_location: arg_srcloc,
                })
            })
            .collect();

        field_map.insert(field.name.to_owned(), Field {
            description: field.description.to_owned(),
            name: field.name.to_owned(),
            parameters,
            parent_type_name: type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&field_srcloc, &field.field_type),
            def_location: field_srcloc,
        });
    }

    Ok(field_map)
}

fn input_fields_from_ast(
    type_def_location: &loc::SourceLocation,
    fields: &[ast::schema::InputValue],
) -> IndexMap<String, TypeAnnotation> {
    fields
        .iter()
        .map(|field| {
            let field_srcloc = type_def_location.with_ast_position(&field.position);
            let annot = TypeAnnotation::from_ast_type(&field_srcloc, &field.value_type);
            (field.name.to_owned(), annot)
        })
        .collect()
}

/// The built-in `__typename` field always comes first.
fn object_or_interface_data_from_ast(
    header: TypeHeader,
    implements_interfaces: &[String],
    fields: &[ast::schema::Field],
) -> Result<ObjectOrInterfaceTypeData> {
    let mut field_map = IndexMap::from([
        ("__typename".to_string(), Field::typename(header.name())),
    ]);
    field_map.extend(fielddefs_from_ast(&header.def_location, header.name(), fields)?);

    Ok(ObjectOrInterfaceTypeData {
        fields: field_map,
        interfaces: implements_interfaces
            .iter()
            .map(|iface_name| TypeRef::new(iface_name, header.def_location.to_owned()))
            .collect(),
        header,
        is_node: false,
    })
}

/// Names of every interface `data` implements, following interface
/// inheritance. Dangling or non-interface names are skipped.
fn transitive_interface_names(
    types: &IndexMap<String, GraphQLType>,
    data: &ObjectOrInterfaceTypeData,
) -> IndexSet<String> {
    let mut seen = IndexSet::new();
    let mut to_visit: Vec<&str> = data.interfaces
        .iter()
        .map(|iface_ref| iface_ref.name())
        .collect();

    while let Some(iface_name) = to_visit.pop() {
        if !seen.insert(iface_name.to_string()) {
            continue;
        }
        if let Some(GraphQLType::Interface(iface)) = types.get(iface_name) {
            to_visit.extend(iface.interface_names());
        }
    }

    seen
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{interface_name}` interface implements itself through its \
        chain of implemented interfaces"
    )]
    CyclicInterfaceImplementation {
        interface_name: String,
        location: loc::SourceLocation,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("Multiple definitions of the {operation} root operation type were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type is declared to implement `{interface_name}`, \
        which is not an interface type"
    )]
    InvalidInterfaceReference {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Cannot apply `extend {}` to the {type_kind} type `{type_name}`",
        .extension_kind.sdl_keyword(),
    )]
    InvalidExtensionType {
        extension_kind: TypeKind,
        extension_location: loc::SourceLocation,
        type_kind: TypeKind,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is not an object type"
    )]
    InvalidRootOperationType {
        location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but union \
        members must be object types"
    )]
    InvalidUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        union_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("The `{type_name}` type is referenced at {location} but never defined")]
    UndefinedTypeReference {
        type_name: String,
        location: loc::SourceLocation,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(file, pos),
            type_name,
        }
    }
}
