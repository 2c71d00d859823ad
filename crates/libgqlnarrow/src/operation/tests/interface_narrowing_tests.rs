use crate::operation::ProxyTypeRef;
use crate::operation::tests::test_utils::evaluate_one;
use crate::operation::tests::test_utils::field_keys;
use crate::operation::tests::test_utils::field_path;
use crate::operation::tests::test_utils::interface_proxy;
use crate::operation::tests::test_utils::object_proxy;
use crate::operation::tests::test_utils::setup_schema;

#[test]
fn implementor_specific_fields_stay_on_their_implementor() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q($k: String) {
            animal(kind: $k) {
                age
                id
                ... on Dog { furColor }
            }
        }
    ");

    let animal_path = field_path(&["animal"]);
    let iface = interface_proxy(&artifact, "Animal", &animal_path);
    let dog = object_proxy(&artifact, "Dog", &animal_path.with_type_condition("Dog"));
    let cat = object_proxy(&artifact, "Cat", &animal_path.with_type_condition("Cat"));

    assert_eq!(field_keys(dog.fields()), vec!["age", "id", "furColor"]);
    assert_eq!(field_keys(cat.fields()), vec!["age", "id"]);
    assert_eq!(field_keys(iface.fields()), vec!["__typename", "age", "id"]);

    assert_eq!(dog.abstract_supertype(), Some(iface.id()));
    assert_eq!(cat.abstract_supertype(), Some(iface.id()));
    assert_eq!(
        iface.implementors().iter().map(|(name, id)| (name.as_str(), *id)).collect::<Vec<_>>(),
        vec![("Dog", dog.id()), ("Cat", cat.id())],
    );
    assert_eq!(
        artifact.root_field().proxy_type(),
        Some(&ProxyTypeRef::Optional(Box::new(ProxyTypeRef::Interface(iface.id())))),
    );
}

#[test]
fn typename_is_injected_on_interface_proxies_only() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "query Q { animal { name } }");

    let animal_path = field_path(&["animal"]);
    let iface = interface_proxy(&artifact, "Animal", &animal_path);
    assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "name"]);
    assert!(iface.field("__typename").unwrap().is_injected());
    assert!(iface.field("id").unwrap().is_injected());

    let dog = object_proxy(&artifact, "Dog", &animal_path.with_type_condition("Dog"));
    assert_eq!(field_keys(dog.fields()), vec!["id", "name"]);
    assert_eq!(iface.name(), "Animal__animal");
    assert_eq!(dog.name(), "Dog__animal__onDog");
}

#[test]
fn selected_typename_is_not_injected_again() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "query Q { animal { name __typename } }");

    let iface = interface_proxy(&artifact, "Animal", &field_path(&["animal"]));
    assert_eq!(field_keys(iface.fields()), vec!["id", "name", "__typename"]);
    assert!(!iface.field("__typename").unwrap().is_injected());
}

#[test]
fn implementors_follow_schema_order() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "query Q($id: ID!) { node(id: $id) { name } }");

    let node_path = field_path(&["node"]);
    let iface = interface_proxy(&artifact, "Node", &node_path);
    assert_eq!(
        iface.implementors().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["Dog", "Cat", "User"],
    );
    assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "name"]);

    for type_name in ["Dog", "Cat", "User"] {
        let obj = object_proxy(&artifact, type_name, &node_path.with_type_condition(type_name));
        assert_eq!(field_keys(obj.fields()), vec!["id", "name"]);
    }
}

#[test]
fn list_of_interface_with_nested_implementor_selections() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            animals {
                name
                ... on Dog { owner { name } }
                ... on Cat { lives }
            }
        }
    ");

    let animals_path = field_path(&["animals"]);
    let iface = interface_proxy(&artifact, "Animal", &animals_path);
    assert_eq!(
        artifact.root_field().proxy_type(),
        Some(&ProxyTypeRef::List(Box::new(ProxyTypeRef::Interface(iface.id())))),
    );
    assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "name"]);

    let dog_path = animals_path.with_type_condition("Dog");
    let dog = object_proxy(&artifact, "Dog", &dog_path);
    assert_eq!(field_keys(dog.fields()), vec!["id", "name", "owner"]);

    let owner = object_proxy(&artifact, "User", &dog_path.with_field("owner"));
    assert_eq!(field_keys(owner.fields()), vec!["id", "name"]);
    assert_eq!(owner.name(), "User__animals__onDog__owner");

    let cat = object_proxy(&artifact, "Cat", &animals_path.with_type_condition("Cat"));
    assert_eq!(field_keys(cat.fields()), vec!["id", "name", "lives"]);
}

#[test]
fn interface_fragment_spreads_reach_every_implementor() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            animal { ...AnimalBits }
        }

        fragment AnimalBits on Animal {
            age
            ... on Cat { lives }
        }
    ");

    let animal_path = field_path(&["animal"]);
    let iface = interface_proxy(&artifact, "Animal", &animal_path);
    let dog = object_proxy(&artifact, "Dog", &animal_path.with_type_condition("Dog"));
    let cat = object_proxy(&artifact, "Cat", &animal_path.with_type_condition("Cat"));

    assert_eq!(field_keys(dog.fields()), vec!["id", "age"]);
    assert_eq!(field_keys(cat.fields()), vec!["id", "age", "lives"]);
    assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "age"]);

    assert_eq!(artifact.stats().fragment_resolutions, 1);
    assert_eq!(artifact.stats().fragment_cache_hits, 2);
}

#[test]
fn inline_fragment_on_base_interface_is_folded_in() {
    let schema = setup_schema();
    let artifact = evaluate_one(&schema, "
        query Q {
            user {
                pets {
                    ... on Node { name }
                    age
                }
            }
        }
    ");

    let pets_path = field_path(&["user", "pets"]);
    let iface = interface_proxy(&artifact, "Animal", &pets_path);
    assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "name", "age"]);

    let dog = object_proxy(&artifact, "Dog", &pets_path.with_type_condition("Dog"));
    assert_eq!(field_keys(dog.fields()), vec!["id", "name", "age"]);
}
