use crate::loc;
use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));
    }

    #[test]
    fn builtin_scalars_are_always_defined() -> Result<()> {
        let schema = SchemaBuilder::from_str("type Query { ok: Boolean }")?.build()?;

        for type_name in ["Boolean", "Float", "ID", "Int", "String"] {
            let Some(GraphQLType::Scalar(scalar_type)) = schema.get_type(type_name) else {
                panic!("expected builtin scalar `{type_name}` to be defined");
            };
            assert!(scalar_type.is_builtin());
            assert_eq!(scalar_type.header().def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        }
        assert_eq!(schema.all_types().len(), 6);

        Ok(())
    }

    #[test]
    fn typename_field_is_injected_first() -> Result<()> {
        let schema = SchemaBuilder::from_str("
            type Query { me: User }
            type User { name: String! }
        ")?.build()?;

        let user_type = schema.object_type("User").expect("User is defined");
        assert_eq!(
            user_type.fields().keys().collect::<Vec<_>>(),
            vec!["__typename", "name"],
        );

        let typename_field = user_type.field("__typename").expect("__typename is present");
        assert_eq!(typename_field.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        assert_eq!(typename_field.type_annotation().to_graphql_string(), "String!");

        Ok(())
    }

    #[test]
    fn default_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::from_str("
            type Mutation { noop: Boolean }
            type Query { ok: Boolean }
        ")?.build()?;

        assert_eq!(schema.root_operation_type_name(&OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_operation_type_name(&OperationKind::Mutation), Some("Mutation"));
        assert_eq!(schema.root_operation_type_name(&OperationKind::Subscription), None);

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::from_str("
            schema {
                query: RootQuery
                subscription: RootSubscription
            }
            type RootQuery { ok: Boolean }
            type RootSubscription { ticks: Int }
        ")?.build()?;

        let query_root = schema.root_operation_type(&OperationKind::Query)
            .expect("query root is defined");
        assert_eq!(query_root.name(), "RootQuery");
        assert_eq!(
            schema.root_operation_type_name(&OperationKind::Subscription),
            Some("RootSubscription"),
        );

        Ok(())
    }

    #[test]
    fn schema_file_path_is_recorded_in_locations() -> Result<()> {
        let schema_path = PathBuf::from("schema.graphql");
        let schema = SchemaBuilder::new()
            .load_str(Some(schema_path.to_owned()), "type Query {\n  ok: Boolean\n}")?
            .build()?;

        let query_type = schema.object_type("Query").expect("Query is defined");
        let file_pos = query_type.header().def_location()
            .file_position()
            .expect("Query has a file position");
        assert_eq!(file_pos.file.as_ref(), Some(&schema_path));
        assert_eq!(file_pos.line, 1);

        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::from_str("
            extend type User implements Named { nickname: String }
            type Query { me: User }
            type User { id: ID! }
            interface Named { nickname: String }
        ")?.build()?;

        let user_type = schema.object_type("User").expect("User is defined");
        assert_eq!(
            user_type.fields().keys().collect::<Vec<_>>(),
            vec!["__typename", "id", "nickname"],
        );
        assert_eq!(user_type.interface_names(), vec!["Named"]);

        Ok(())
    }

    #[test]
    fn enum_and_union_extensions() -> Result<()> {
        let schema = SchemaBuilder::from_str("
            type Query { pet: Pet, color: Color }
            type Cat { name: String }
            type Dog { name: String }
            union Pet = Cat
            extend union Pet = Dog
            enum Color { RED }
            extend enum Color { BLUE }
        ")?.build()?;

        let pet_type = schema.union_type("Pet").expect("Pet is defined");
        assert_eq!(pet_type.member_type_names(), vec!["Cat", "Dog"]);

        let Some(GraphQLType::Enum(color_type)) = schema.get_type("Color") else {
            panic!("Color is not an enum");
        };
        assert_eq!(color_type.values().iter().collect::<Vec<_>>(), vec!["RED", "BLUE"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { ok: Boolean }
            extend type Missing { field: Int }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { ok: Boolean }
            enum Color { RED }
            extend type Color { hex: String }
        ")?.build();

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot apply `extend type` to the enum type `Color`",
        );
        assert!(matches!(
            err,
            SchemaBuildError::InvalidExtensionType {
                extension_kind: TypeKind::Object,
                extension_location: loc::SourceLocation::Schema(_),
                type_kind: TypeKind::Enum,
                type_name,
            } if type_name == "Color",
        ));

        Ok(())
    }

    #[test]
    fn extension_with_duplicate_field() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { ok: Boolean }
            extend type Query { ok: Boolean }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { field_name, type_name, .. }
                if field_name == "ok" && type_name == "Query",
        ));

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { ok: Boolean }
            type User { id: ID }
        ")?.load_str(None, "type User { name: String }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. }
                if type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn duplicate_root_operation_definition() -> Result<()> {
        let result = SchemaBuilder::from_str("
            schema { query: Query }
            type Query { ok: Boolean }
        ")?.load_str(None, "schema { query: Query }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            },
        ));

        Ok(())
    }

    #[test]
    fn undefined_field_type_reference() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { me: User }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::UndefinedTypeReference { type_name, .. }
                if type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn union_member_must_be_object() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { thing: Thing }
            interface Named { name: String }
            union Thing = Named
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidUnionMember { member_name, union_name, .. }
                if member_name == "Named" && union_name == "Thing",
        ));

        Ok(())
    }

    #[test]
    fn implementing_a_non_interface() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { me: User }
            type Named { name: String }
            type User implements Named { name: String }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidInterfaceReference { interface_name, type_name, .. }
                if interface_name == "Named" && type_name == "User",
        ));

        Ok(())
    }

    #[test]
    fn cyclic_interface_implementation() -> Result<()> {
        let result = SchemaBuilder::from_str("
            type Query { ok: Boolean }
            interface A implements B { ok: Boolean }
            interface B implements A { ok: Boolean }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::CyclicInterfaceImplementation { .. },
        ));

        Ok(())
    }

    #[test]
    fn root_operation_type_must_be_object() -> Result<()> {
        let result = SchemaBuilder::from_str("
            schema { query: Root }
            interface Root { ok: Boolean }
        ")?.build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidRootOperationType {
                operation: OperationKind::Query,
                type_name,
                ..
            } if type_name == "Root",
        ));

        Ok(())
    }

    #[test]
    fn parse_error_reports_file() {
        let result = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("broken.graphql")), "type Query {");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ParseError { file: Some(file), .. }
                if file == PathBuf::from("broken.graphql"),
        ));
    }

    #[test]
    fn missing_schema_file() {
        let result = SchemaBuilder::from_files(vec!["/definitely/not/a/schema.graphql"]);

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(_),
        ));
    }
}
