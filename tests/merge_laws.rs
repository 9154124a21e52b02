//! Merge laws of styled components, checked over generated property sets.

use std::collections::BTreeMap;

use proptest::prelude::*;
use spark_styled::{create_component, Component, PropertySet, Value};

/// Host stand-in that renders to the props it receives.
struct Echo;

impl Component for Echo {
    type Props = PropertySet;
    type Output = BTreeMap<String, Value>;

    fn render(&self, props: PropertySet) -> Self::Output {
        props.snapshot()
    }
}

fn props_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-f]", any::<i64>(), 0..6)
}

fn to_set(map: &BTreeMap<String, i64>) -> PropertySet {
    map.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

fn to_values(map: &BTreeMap<String, i64>) -> BTreeMap<String, Value> {
    map.iter().map(|(k, v)| (k.clone(), Value::Int(*v))).collect()
}

proptest! {
    #[test]
    fn instance_wins_and_defaults_fill_in(
        defaults in props_strategy(),
        instance in props_strategy(),
    ) {
        let styled = create_component(Echo).bind(Some(to_set(&defaults)));
        let effective = styled.render(to_set(&instance));

        for (key, value) in &instance {
            prop_assert_eq!(effective.get(key), Some(&Value::Int(*value)));
        }
        for (key, value) in &defaults {
            if !instance.contains_key(key) {
                prop_assert_eq!(effective.get(key), Some(&Value::Int(*value)));
            }
        }
        for key in effective.keys() {
            prop_assert!(defaults.contains_key(key) || instance.contains_key(key));
        }
    }

    #[test]
    fn empty_defaults_are_identity(instance in props_strategy()) {
        let unbound = create_component(Echo).bind(None);
        let empty = create_component(Echo).bind(Some(PropertySet::new()));

        prop_assert_eq!(unbound.render(to_set(&instance)), to_values(&instance));
        prop_assert_eq!(empty.render(to_set(&instance)), to_values(&instance));
    }

    #[test]
    fn rerender_does_not_accumulate(defaults in props_strategy(), instance in props_strategy()) {
        let styled = create_component(Echo).bind(Some(to_set(&defaults)));

        let first = styled.render(to_set(&instance));
        let second = styled.render(to_set(&instance));
        prop_assert_eq!(first, second);
        prop_assert_eq!(styled.defaults().snapshot(), to_values(&defaults));
    }

    #[test]
    fn nested_bindings_layer_in_order(
        inner in props_strategy(),
        outer in props_strategy(),
        instance in props_strategy(),
    ) {
        let wrapped = create_component(Echo).bind(Some(to_set(&inner)));
        let rewrapped = create_component(wrapped).bind(Some(to_set(&outer)));

        let mut expected = to_values(&inner);
        expected.extend(to_values(&outer));
        expected.extend(to_values(&instance));

        prop_assert_eq!(rewrapped.render(to_set(&instance)), expected);
    }
}

#[test]
fn composed_names() {
    let once = create_component(Echo).bind(None);
    assert_eq!(once.name(), "CustomEcho");

    let twice = create_component(once).bind(None);
    assert_eq!(twice.name(), "CustomCustomEcho");
}
