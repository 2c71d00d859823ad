use crate::operation::NarrowingError;
use crate::operation::OperationKind;
use crate::operation::SchemaReferenceKind;
use crate::operation::SelectionPath;
use crate::operation::UnsupportedConstructKind;
use crate::operation::VariableBindingKind;
use crate::operation::VariableUse;
use crate::operation::tests::test_utils::evaluate_err;
use crate::operation::tests::test_utils::evaluate_one;
use crate::operation::tests::test_utils::field_path;
use crate::operation::tests::test_utils::object_proxy;
use crate::operation::tests::test_utils::setup_schema;
use crate::types::ResolvedType;
use crate::types::ScalarKind;

/// `(variable_name, argument_name, argument_position)` of each use.
fn summarize(uses: &[&VariableUse]) -> Vec<(String, String, usize)> {
    uses.iter()
        .map(|var_use| (
            var_use.variable_name().to_string(),
            var_use.argument_name().to_string(),
            var_use.argument_position(),
        ))
        .collect()
}

// =============================================================================
// Variable definitions
// =============================================================================

#[test]
fn variable_definitions_are_resolved_in_declaration_order() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($ids: [ID!], $n: Int = 10) {
            users(ids: $ids, first: $n) { name }
        }
    ");

    let variables = artifact.variables();
    assert_eq!(variables.keys().map(|name| name.as_str()).collect::<Vec<_>>(), vec!["ids", "n"]);

    let ids = variables.get("ids").unwrap();
    assert_eq!(ids.name(), "ids");
    assert_eq!(ids.type_annotation().to_graphql_string(), "[ID!]");
    assert_eq!(
        ids.resolved_type(),
        &ResolvedType::Optional(Box::new(ResolvedType::List(Box::new(
            ResolvedType::Scalar(ScalarKind::ID),
        )))),
    );
    assert_eq!(ids.default_value(), None);

    let n = variables.get("n").unwrap();
    assert_eq!(n.resolved_type().to_string(), "Optional<Int>");
    assert_eq!(n.default_value(), Some("10"));
}

#[test]
fn nested_list_variable_is_unsupported() {
    let schema = setup_schema();

    let err = evaluate_err(&schema, "query Q($ids: [[ID!]]) { users { name } }");

    assert_eq!(err, NarrowingError::UnsupportedConstructError {
        kind: UnsupportedConstructKind::NestedListType {
            subject: "variable `$ids`".to_string(),
            type_annotation: "[[ID!]]".to_string(),
        },
        path: SelectionPath::root(),
    });
}

#[test]
fn variable_of_undefined_type() {
    let schema = setup_schema();

    let err = evaluate_err(&schema, "query Q($x: Nope) { user { name } }");

    assert_eq!(err, NarrowingError::SchemaReferenceError {
        kind: SchemaReferenceKind::UndefinedType {
            type_name: "Nope".to_string(),
        },
        path: SelectionPath::root(),
    });
}

// =============================================================================
// Binding
// =============================================================================

#[test]
fn variable_binds_to_argument_position() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "query Q($id: ID!) { node(id: $id) { name } }");

    assert_eq!(artifact.variables().len(), 1);
    let root_uses = artifact.root_field().variable_uses();
    assert_eq!(root_uses.len(), 1);
    assert_eq!(root_uses[0].argument_name(), "id");
    assert_eq!(root_uses[0].argument_position(), 0);
    assert_eq!(root_uses[0].variable_name(), "id");
    assert_eq!(root_uses[0].field_path(), &field_path(&["node"]));

    assert_eq!(artifact.variable_uses().len(), 1);
}

#[test]
fn uses_are_ordered_by_parameter_position() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($c: String, $n: Int) {
            user { friends(after: $c, first: $n) { name } }
        }
    ");

    let user = object_proxy(&artifact, "User", &field_path(&["user"]));
    let friends = user.field("friends").unwrap();
    let uses: Vec<&VariableUse> = friends.variable_uses().iter().collect();
    assert_eq!(summarize(&uses), vec![
        ("n".to_string(), "first".to_string(), 0),
        ("c".to_string(), "after".to_string(), 1),
    ]);
    assert!(uses.iter().all(|var_use| var_use.field_path() == &field_path(&["user", "friends"])));
}

#[test]
fn variables_nested_in_list_literals_bind_to_the_enclosing_argument() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($a: ID!, $b: ID!, $n: Int) {
            users(ids: [$a, $b], first: $n) { name }
        }
    ");

    assert_eq!(summarize(&artifact.variable_uses()), vec![
        ("a".to_string(), "ids".to_string(), 0),
        ("b".to_string(), "ids".to_string(), 0),
        ("n".to_string(), "first".to_string(), 1),
    ]);
}

#[test]
fn mutation_variables() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        mutation Rename($id: ID!, $name: String!) {
            renameUser(name: $name, id: $id) { name }
        }
    ");

    assert_eq!(artifact.kind(), OperationKind::Mutation);
    assert_eq!(artifact.root_type_name(), "Mutation");
    assert_eq!(summarize(&artifact.variable_uses()), vec![
        ("id".to_string(), "id".to_string(), 0),
        ("name".to_string(), "name".to_string(), 1),
    ]);
}

#[test]
fn uses_inside_fragments_are_counted_once() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($n: Int) {
            user {
                ...Friends
                bestFriend { ...Friends }
            }
        }

        fragment Friends on User {
            friends(first: $n) { name }
        }
    ");

    let uses = artifact.variable_uses();
    assert_eq!(uses.len(), 1);
    assert_eq!(
        uses[0].field_path(),
        &SelectionPath::for_fragment("Friends").with_field("friends"),
    );
}

#[test]
fn uses_inside_merged_sub_selections_are_counted_once() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($n: Int) {
            user {
                bestFriend { name }
                ...BestFriends
            }
        }

        fragment BestFriends on User {
            bestFriend { friends(first: $n) { name } }
        }
    ");

    assert_eq!(summarize(&artifact.variable_uses()), vec![
        ("n".to_string(), "first".to_string(), 0),
    ]);
}

#[test]
fn uses_under_interfaces_are_counted_once() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($n: Int) {
            animal { owner { friends(first: $n) { name } } }
        }
    ");

    assert_eq!(artifact.proxies().objects_of_type("Dog").count(), 1);
    assert_eq!(summarize(&artifact.variable_uses()), vec![
        ("n".to_string(), "first".to_string(), 0),
    ]);
}

#[test]
fn root_field_selected_through_a_fragment() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($id: ID) { ...Root }

        fragment Root on Query {
            user(id: $id) { name }
        }
    ");

    let root_field = artifact.root_field();
    assert_eq!(root_field.name(), "user");
    assert_eq!(root_field.path(), &field_path(&["user"]));
    assert_eq!(artifact.variable_uses().len(), 1);

    assert!(artifact.proxies().objects_of_type("Query").next().is_none());
    assert_eq!(artifact.proxies().len(), 1);
    object_proxy(&artifact, "User", &field_path(&["user"]));
    assert_eq!(artifact.stats().fragment_resolutions, 0);
}

#[test]
fn root_fragments_nested_in_root_fragments_are_expanded() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($id: ID) { ... on Query { ...Outer } }

        fragment Outer on Query { ...Inner }
        fragment Inner on Query { user(id: $id) { ...UserName } }
        fragment UserName on User { name }
    ");

    assert_eq!(artifact.root_field().path(), &field_path(&["user"]));
    assert!(artifact.proxies().objects_of_type("Query").next().is_none());
    assert_eq!(
        artifact.fragments().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["UserName"],
    );
}

#[test]
fn root_fragment_cycle() {
    let schema = setup_schema();
    let err = evaluate_err(&schema, "
        query Q { ...A }

        fragment A on Query { ...B }
        fragment B on Query { ...A }
    ");

    assert_eq!(err, NarrowingError::FragmentCycleError {
        cycle: vec!["A".to_string(), "B".to_string(), "A".to_string()],
    });
}

#[test]
fn literal_arguments_bind_nothing() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, r#"query Q { user(id: "4") { name } }"#);

    assert!(artifact.root_field().variable_uses().is_empty());
    assert!(artifact.variable_uses().is_empty());
}

// =============================================================================
// Binding errors
// =============================================================================

#[test]
fn undeclared_variable() {
    let schema = setup_schema();

    let err = evaluate_err(&schema, "query Q { user(id: $missing) { name } }");

    assert_eq!(err, NarrowingError::VariableBindingError {
        kind: VariableBindingKind::UndeclaredVariable {
            argument_name: "id".to_string(),
            variable_name: "missing".to_string(),
        },
        path: field_path(&["user"]),
    });
}

#[test]
fn undeclared_variable_inside_fragment() {
    let schema = setup_schema();

    let err = evaluate_err(&schema, "
        query Q { user { ...Friends } }

        fragment Friends on User { friends(first: $n) { name } }
    ");

    assert!(matches!(
        err,
        NarrowingError::VariableBindingError {
            kind: VariableBindingKind::UndeclaredVariable { .. },
            ..
        },
    ));
}

#[test]
fn variable_passed_to_unknown_argument() {
    let schema = setup_schema();

    let err = evaluate_err(&schema, "query Q($x: ID) { user(bogus: $x) { name } }");

    assert_eq!(err, NarrowingError::VariableBindingError {
        kind: VariableBindingKind::BindingCountMismatch {
            bindings: 0,
            field_name: "user".to_string(),
            references: 1,
        },
        path: field_path(&["user"]),
    });
}
