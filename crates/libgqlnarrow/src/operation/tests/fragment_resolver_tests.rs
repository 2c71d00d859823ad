use crate::operation::DocumentEvaluationError;
use crate::operation::DocumentLoadError;
use crate::operation::FragmentIndexError;
use crate::operation::NarrowingError;
use crate::operation::ProxyTypeRef;
use crate::operation::SelectionPath;
use crate::operation::tests::test_utils::evaluate;
use crate::operation::tests::test_utils::evaluate_err;
use crate::operation::tests::test_utils::evaluate_one;
use crate::operation::tests::test_utils::field_keys;
use crate::operation::tests::test_utils::field_path;
use crate::operation::tests::test_utils::interface_proxy;
use crate::operation::tests::test_utils::object_proxy;
use crate::operation::tests::test_utils::setup_schema;
use crate::types::TypeKind;

mod resolution {
    use super::*;

    #[test]
    fn fragments_are_resolved_once_per_operation() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q {
                user {
                    ...UserName
                    friends { ...UserName }
                }
            }

            fragment UserName on User { name }
        ");

        assert_eq!(artifact.stats().fragment_resolutions, 1);
        assert_eq!(artifact.stats().fragment_cache_hits, 1);
        assert_eq!(artifact.proxies().objects_of_type("User").count(), 3);

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "friends", "name"]);
        assert_eq!(
            user.field("name").unwrap().path(),
            &SelectionPath::for_fragment("UserName").with_field("name"),
        );

        let friends = object_proxy(&artifact, "User", &field_path(&["user", "friends"]));
        assert_eq!(field_keys(friends.fields()), vec!["id", "name"]);

        let fragment_proxy =
            object_proxy(&artifact, "User", &SelectionPath::for_fragment("UserName"));
        assert_eq!(fragment_proxy.name(), "User__UserName");
        assert_eq!(field_keys(fragment_proxy.fields()), vec!["id", "name"]);

        let fragment = artifact.fragments().get("UserName").unwrap();
        assert_eq!(fragment.name(), "UserName");
        assert_eq!(fragment.type_name(), "User");
        assert_eq!(fragment.type_kind(), TypeKind::Object);
        assert_eq!(fragment.proxy(), &ProxyTypeRef::Object(fragment_proxy.id()));
        assert!(fragment.concrete_proxies().is_empty());
    }

    #[test]
    fn fragment_cache_is_not_shared_between_operations() {
        let schema = setup_schema();
        let artifacts = evaluate(&schema, "
            query A { user { ...UserName } }
            query B { users { ...UserName } }

            fragment UserName on User { name }
        ").unwrap();

        assert_eq!(artifacts.len(), 2);
        for artifact in &artifacts {
            assert_eq!(artifact.stats().fragment_resolutions, 1);
            assert_eq!(artifact.stats().fragment_cache_hits, 0);
            assert_eq!(
                artifact.fragments().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
                vec!["UserName"],
            );
        }
    }

    #[test]
    fn unused_fragments_are_not_resolved() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { user { name } }

            fragment Unused on User { mood }
        ");

        assert!(artifact.fragments().is_empty());
        assert_eq!(artifact.stats().fragment_resolutions, 0);
    }
}

mod contributions {
    use super::*;

    #[test]
    fn shared_composite_field_merges_fragment_sub_selection() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q {
                user {
                    bestFriend { name }
                    ...Friendly
                }
            }

            fragment Friendly on User {
                bestFriend { mood }
            }
        ");

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "bestFriend"]);
        assert_eq!(
            user.field("bestFriend").unwrap().path(),
            &field_path(&["user", "bestFriend"]),
        );

        let best_friend = object_proxy(&artifact, "User", &field_path(&["user", "bestFriend"]));
        assert_eq!(field_keys(best_friend.fields()), vec!["id", "name", "mood"]);

        let fragment_best_friend = object_proxy(
            &artifact,
            "User",
            &SelectionPath::for_fragment("Friendly").with_field("bestFriend"),
        );
        assert_eq!(field_keys(fragment_best_friend.fields()), vec!["id", "mood"]);
    }

    #[test]
    fn composite_field_shared_by_two_fragments_is_merged() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { user { ...FriendName ...FriendMood } }

            fragment FriendName on User { bestFriend { name } }
            fragment FriendMood on User { bestFriend { mood } }
        ");

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "bestFriend"]);
        assert_eq!(
            user.field("bestFriend").unwrap().path(),
            &field_path(&["user", "bestFriend"]),
        );

        let best_friend = object_proxy(&artifact, "User", &field_path(&["user", "bestFriend"]));
        assert_eq!(field_keys(best_friend.fields()), vec!["id", "name", "mood"]);
    }

    #[test]
    fn scalar_field_shared_with_a_fragment_keeps_the_direct_selection() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { user { name ...UserName } }

            fragment UserName on User { name }
        ");

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "name"]);
        assert_eq!(user.field("name").unwrap().path(), &field_path(&["user", "name"]));
    }

    #[test]
    fn implementor_field_merges_interface_fragment_sub_selection() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q {
                animal {
                    ...AnimalOwner
                    ... on Dog { owner { name } }
                }
            }

            fragment AnimalOwner on Animal { owner { mood } }
        ");

        let animal_path = field_path(&["animal"]);
        let dog_path = animal_path.with_type_condition("Dog");
        let dog = object_proxy(&artifact, "Dog", &dog_path);
        assert_eq!(field_keys(dog.fields()), vec!["id", "owner"]);

        let dog_owner = object_proxy(&artifact, "User", &dog_path.with_field("owner"));
        assert_eq!(field_keys(dog_owner.fields()), vec!["id", "name", "mood"]);

        let cat = object_proxy(&artifact, "Cat", &animal_path.with_type_condition("Cat"));
        let cat_owner_id = cat.field("owner").unwrap().proxy_type().unwrap().proxy_id();
        let cat_owner = artifact.proxies().object(cat_owner_id).unwrap();
        assert_eq!(field_keys(cat_owner.fields()), vec!["id", "mood"]);
    }

    #[test]
    fn injected_id_is_replaced_by_fragment_id() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { user { name ...UserId } }

            fragment UserId on User { id }
        ");

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "name"]);

        let id_field = user.field("id").unwrap();
        assert!(!id_field.is_injected());
        assert_eq!(id_field.path(), &SelectionPath::for_fragment("UserId").with_field("id"));
    }

    #[test]
    fn interface_fragment_on_object_uses_its_concrete_proxy() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { user { ...NodeName } }

            fragment NodeName on Node { name }
        ");

        let user = object_proxy(&artifact, "User", &field_path(&["user"]));
        assert_eq!(field_keys(user.fields()), vec!["id", "name"]);

        let fragment = artifact.fragments().get("NodeName").unwrap();
        assert_eq!(fragment.type_kind(), TypeKind::Interface);
        assert_eq!(
            fragment.concrete_proxies().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
            vec!["Dog", "Cat", "User"],
        );
        assert_eq!(
            fragment.concrete_proxies().get("User"),
            Some(&object_proxy(
                &artifact,
                "User",
                &SelectionPath::for_fragment("NodeName").with_type_condition("User"),
            ).id()),
        );
    }

    #[test]
    fn base_interface_fragment_on_derived_interface() {
        let schema = setup_schema();
        let artifact = evaluate_one(&schema, "
            query Q { animal { ...NodeName } }

            fragment NodeName on Node { name }
        ");

        let animal_path = field_path(&["animal"]);
        let iface = interface_proxy(&artifact, "Animal", &animal_path);
        assert_eq!(field_keys(iface.fields()), vec!["id", "__typename", "name"]);

        let dog = object_proxy(&artifact, "Dog", &animal_path.with_type_condition("Dog"));
        assert_eq!(field_keys(dog.fields()), vec!["id", "name"]);
    }
}

mod errors {
    use super::*;

    #[test]
    fn fragment_cycle() {
        let schema = setup_schema();

        let err = evaluate_err(&schema, "
            query Q { user { ...A } }

            fragment A on User { name ...B }
            fragment B on User { mood ...A }
        ");

        assert_eq!(err, NarrowingError::FragmentCycleError {
            cycle: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        });
        assert_eq!(err.to_string(), "Fragment spreads form a cycle: A → B → A");
    }

    #[test]
    fn self_referencing_fragment() {
        let schema = setup_schema();

        let err = evaluate_err(&schema, "
            query Q { user { ...A } }

            fragment A on User { friends { ...A } }
        ");

        assert_eq!(err, NarrowingError::FragmentCycleError {
            cycle: vec!["A".to_string(), "A".to_string()],
        });
    }

    #[test]
    fn undefined_fragment() {
        let schema = setup_schema();

        let err = evaluate_err(&schema, "query Q { user { ...Nope } }");

        assert_eq!(err, NarrowingError::UndefinedFragmentError {
            fragment_name: "Nope".to_string(),
            path: field_path(&["user"]),
        });
    }

    #[test]
    fn duplicate_fragment_definition() {
        let schema = setup_schema();

        let result = evaluate(&schema, "
            query Q { user { ...F } }

            fragment F on User { name }
            fragment F on User { mood }
        ");

        assert!(matches!(
            result,
            Err(DocumentEvaluationError::LoadError(DocumentLoadError::FragmentIndexError(
                FragmentIndexError::DuplicateFragmentDefinition { ref fragment_name, .. },
            ))) if fragment_name == "F",
        ));
    }
}
