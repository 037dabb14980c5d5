//! Tests for the ordered collection

use amocrm_sdk::{Collection, CollectionError, CollectionKey};
use serde_json::{Value, json};

mod indexed_access_tests {
    use super::*;

    #[test]
    fn test_append_then_remove_does_not_reuse_keys() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        let keys = ["a", "b", "c"]
            .into_iter()
            .map(|value| collection.set(None, value))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(
            keys,
            vec![CollectionKey::Index(0), CollectionKey::Index(1), CollectionKey::Index(2)]
        );

        collection.remove(1);
        assert_eq!(collection.set(None, "d")?, CollectionKey::Index(3));
        assert!(!collection.has(1));
        assert_eq!(collection.len(), 3);
        Ok(())
    }

    #[test]
    fn test_set_with_key_overwrites_in_place() {
        let mut collection: Collection<i32> =
            [("first", 1), ("second", 2), ("third", 3)].into_iter().collect();
        collection.set(Some("second".into()), 22).unwrap();

        let values: Vec<_> = collection.values().copied().collect();
        assert_eq!(values, vec![1, 22, 3]);
    }

    #[test]
    fn test_mixed_keys_coexist() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        collection.push("zero")?;
        collection.insert("name", "named");
        collection.insert(100, "hundred");
        collection.push("next")?;

        let keys: Vec<String> = collection.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["0", "name", "100", "101"]);
        Ok(())
    }

    #[test]
    fn test_append_never_overwrites_the_last_key() {
        let mut collection = Collection::new();
        collection.insert(i64::MAX, "existing");

        assert_eq!(collection.push("new"), Err(CollectionError::NextKeyOccupied));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(i64::MAX).map(|value| *value), Ok("existing"));
    }

    #[test]
    fn test_get_does_not_default() {
        let collection: Collection<Value> = Collection::new();
        match collection.get(0) {
            Err(CollectionError::KeyNotFound(key)) => assert_eq!(key, CollectionKey::Index(0)),
            other => panic!("Expected KeyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_mut() -> anyhow::Result<()> {
        let mut collection = Collection::from_values([1, 2]);
        *collection.get_mut(1)? += 40;
        assert_eq!(collection.get(1)?, &42);
        Ok(())
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab: Collection<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: Collection<i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
    }
}

mod construction_tests {
    use super::*;

    #[test]
    fn test_from_raw_array_and_object() -> anyhow::Result<()> {
        let list = Collection::from_raw(&json!([1, 2, 3]))?;
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_value(), json!([1, 2, 3]));

        let map = Collection::<Value>::try_from(json!({"z": 1, "a": 2}))?;
        let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["z", "a"]);
        Ok(())
    }

    #[test]
    fn test_from_raw_rejects_scalars() {
        for raw in [json!(null), json!(true), json!(1), json!("items")] {
            let err = Collection::from_raw(&raw).unwrap_err();
            assert!(
                matches!(err, CollectionError::InvalidInputKind { .. }),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_extend() {
        let mut collection = Collection::from_values(["a"]);
        collection.extend([(5, "b"), (1, "c")]);
        assert_eq!(collection.push("d"), Ok(CollectionKey::Index(6)));
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn test_json_export_matches_to_value() -> anyhow::Result<()> {
        let mut collection = Collection::from_raw(&json!([{"a": 1}, {"b": 2}]))?;
        assert_eq!(serde_json::to_string(&collection)?, r#"[{"a":1},{"b":2}]"#);

        collection.remove(0);
        assert_eq!(serde_json::to_string(&collection)?, r#"{"1":{"b":2}}"#);
        assert_eq!(
            serde_json::to_string(&collection)?,
            serde_json::to_string(&collection.to_value())?
        );
        Ok(())
    }

    #[test]
    fn test_owned_iteration_keeps_order() {
        let collection: Collection<&str> = [(2, "two"), (0, "zero"), (1, "one")].into_iter().collect();
        let entries: Vec<_> = collection.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (CollectionKey::Index(2), "two"),
                (CollectionKey::Index(0), "zero"),
                (CollectionKey::Index(1), "one")
            ]
        );
    }
}
