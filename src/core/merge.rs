//! Shallow property copying between records.

use super::collection::each;
use super::record::RecordMut;

/// Copy every property of each source into `target`. Later sources
/// overwrite earlier ones and the target's own values.
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: RecordMut,
    M::Value: Clone,
{
    each(sources, |source, _, _| {
        for (key, value) in source.properties() {
            target.set_property(key, value.clone());
        }
    });
    target
}

/// Copy properties of each source into `target` only where `target` does
/// not have them yet. The first source to provide a key wins.
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: RecordMut,
    M::Value: Clone,
{
    each(sources, |source, _, _| {
        for (key, value) in source.properties() {
            if !target.has_property(key) {
                target.set_property(key, value.clone());
            }
        }
    });
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};
    use std::collections::BTreeMap;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_extend_overwrites_in_order() {
        let mut target = object(json!({"a": 1, "b": 1}));
        let first = object(json!({"b": 2, "c": 2}));
        let second = object(json!({"c": 3, "d": 3}));

        let result = extend(&mut target, &[&first, &second]);

        assert_eq!(
            Value::Object(result.clone()),
            json!({"a": 1, "b": 2, "c": 3, "d": 3})
        );
    }

    #[test]
    fn test_defaults_never_overwrites() {
        let mut target = object(json!({"flavor": "chocolate"}));
        let first = object(json!({"flavor": "vanilla", "sprinkles": "lots"}));
        let second = object(json!({"sprinkles": "none", "cone": true}));

        defaults(&mut target, &[&first, &second]);

        assert_eq!(
            Value::Object(target),
            json!({"flavor": "chocolate", "sprinkles": "lots", "cone": true})
        );
    }

    #[test]
    fn test_merge_with_no_sources() {
        let mut target: BTreeMap<String, i32> = BTreeMap::from([("x".to_string(), 1)]);
        extend(&mut target, &[]);
        defaults(&mut target, &[]);
        assert_eq!(target, BTreeMap::from([("x".to_string(), 1)]));
    }

    #[test]
    fn test_extend_btree_map() {
        let mut target: BTreeMap<String, i32> = BTreeMap::new();
        let source = BTreeMap::from([("k".to_string(), 9)]);
        extend(&mut target, &[&source]).insert("z".to_string(), 0);
        assert_eq!(target.get("k"), Some(&9));
        assert_eq!(target.get("z"), Some(&0));
    }
}
