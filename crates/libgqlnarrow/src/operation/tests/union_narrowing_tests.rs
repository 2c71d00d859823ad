use crate::operation::ProxyId;
use crate::operation::ProxyTypeRef;
use crate::operation::tests::test_utils::evaluate_one;
use crate::operation::tests::test_utils::field_keys;
use crate::operation::tests::test_utils::field_path;
use crate::operation::tests::test_utils::object_proxy;
use crate::operation::tests::test_utils::setup_schema;
use crate::operation::tests::test_utils::union_proxy;
use crate::types::TypeKind;
use indexmap::IndexMap;

fn branch_names(branches: &IndexMap<String, ProxyId>) -> Vec<&str> {
    branches.keys().map(|name| name.as_str()).collect()
}

#[test]
fn one_branch_per_selected_member() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            whoAmI {
                ... on Frog { color }
                ... on Person { age }
            }
        }
    ");

    let who_path = field_path(&["whoAmI"]);
    let union = union_proxy(&artifact, "Creature", &who_path);
    assert_eq!(branch_names(union.branches()), vec!["Frog", "Person"]);
    assert_eq!(
        artifact.root_field().proxy_type(),
        Some(&ProxyTypeRef::Optional(Box::new(ProxyTypeRef::Union(union.id())))),
    );

    let frog = object_proxy(&artifact, "Frog", &who_path.with_type_condition("Frog"));
    let person = object_proxy(&artifact, "Person", &who_path.with_type_condition("Person"));
    assert_eq!(field_keys(frog.fields()), vec!["__typename", "color"]);
    assert_eq!(field_keys(person.fields()), vec!["__typename", "age"]);
    assert!(frog.field("__typename").unwrap().is_injected());

    assert_eq!(frog.abstract_supertype(), Some(union.id()));
    assert_eq!(union.branches().get("Frog"), Some(&frog.id()));
    assert_eq!(union.branches().get("Person"), Some(&person.id()));
}

#[test]
fn branches_follow_document_order() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            whoAmI {
                ... on Person { age }
                ... on Frog { color }
            }
        }
    ");

    let union = union_proxy(&artifact, "Creature", &field_path(&["whoAmI"]));
    assert_eq!(branch_names(union.branches()), vec!["Person", "Frog"]);
}

#[test]
fn unselected_members_get_no_branch() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            whoAmI { ...PersonAge }
        }

        fragment PersonAge on Person { age }
    ");

    let who_path = field_path(&["whoAmI"]);
    let union = union_proxy(&artifact, "Creature", &who_path);
    assert_eq!(branch_names(union.branches()), vec!["Person"]);

    let person = object_proxy(&artifact, "Person", &who_path.with_type_condition("Person"));
    assert_eq!(field_keys(person.fields()), vec!["__typename", "age"]);
    assert!(artifact.proxies().find("Frog", &who_path.with_type_condition("Frog")).is_none());
}

#[test]
fn union_fragment_contributes_to_its_branches() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, r#"
        query Q {
            search(text: "ribbit") {
                ...CreatureBits
                ... on Person { age }
            }
        }

        fragment CreatureBits on Creature {
            ... on Frog { name }
        }
    "#);

    let search_path = field_path(&["search"]);
    let union = union_proxy(&artifact, "Creature", &search_path);
    assert_eq!(branch_names(union.branches()), vec!["Person", "Frog"]);
    assert_eq!(
        artifact.root_field().proxy_type(),
        Some(&ProxyTypeRef::List(Box::new(ProxyTypeRef::Union(union.id())))),
    );

    let frog = object_proxy(&artifact, "Frog", &search_path.with_type_condition("Frog"));
    let person = object_proxy(&artifact, "Person", &search_path.with_type_condition("Person"));
    assert_eq!(field_keys(frog.fields()), vec!["__typename", "name"]);
    assert_eq!(field_keys(person.fields()), vec!["__typename", "age"]);

    let fragment = artifact.fragments().get("CreatureBits").unwrap();
    assert_eq!(fragment.type_kind(), TypeKind::Union);
    assert_eq!(branch_names(fragment.concrete_proxies()), vec!["Frog"]);
}

#[test]
fn selections_on_non_members_are_skipped() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            whoAmI {
                ... on Dog { furColor }
                ... on Frog { color }
            }
        }
    ");

    let union = union_proxy(&artifact, "Creature", &field_path(&["whoAmI"]));
    assert_eq!(branch_names(union.branches()), vec!["Frog"]);
    assert_eq!(artifact.proxies().objects_of_type("Dog").count(), 0);
}

#[test]
fn selected_typename_is_kept_as_selected() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            whoAmI {
                __typename
                ... on Frog { color }
            }
        }
    ");

    let who_path = field_path(&["whoAmI"]);
    let union = union_proxy(&artifact, "Creature", &who_path);
    assert_eq!(branch_names(union.branches()), vec!["Frog"]);

    let frog = object_proxy(&artifact, "Frog", &who_path.with_type_condition("Frog"));
    assert_eq!(field_keys(frog.fields()), vec!["__typename", "color"]);
    assert!(!frog.field("__typename").unwrap().is_injected());
}
